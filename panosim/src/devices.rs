mod actuator;
mod camera;
mod clock;
mod sensors;

pub use actuator::SimActuator;
pub use camera::SimCamera;
pub use clock::SimClock;
pub use sensors::{SimBattery, SimMotionSensor};

use crate::config::DeviceConfig;
use pano_gcode::Devices;
use std::cell::Cell;
use std::rc::Rc;

pub type SimDevices =
    Devices<SimActuator, SimCamera, SimMotionSensor, SimBattery, SimClock>;

/// Builds the simulated rig.
///
/// The actuator and the motion sensor share the time at which the rig comes
/// to rest after the last rotation.
pub fn build(config: &DeviceConfig) -> SimDevices {
    let clock = SimClock::new(config.realtime);
    let still_at_ms = Rc::new(Cell::new(0));
    Devices {
        actuator: SimActuator::new(
            clock.clone(),
            still_at_ms.clone(),
            config.residual_motion_ms,
        ),
        camera: SimCamera::new(
            clock.clone(),
            config.shutter_connected,
            config.focus_connected,
        ),
        motion_sensor: SimMotionSensor::new(clock.clone(), still_at_ms),
        battery: SimBattery::new(config.battery_volts),
        clock,
    }
}
