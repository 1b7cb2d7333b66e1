mod actuator;
mod camera;
mod clock;
mod sensors;

pub use actuator::Actuator;
pub use actuator::SpeedProfile;
pub use camera::Camera;
pub use clock::Clock;
pub use sensors::Battery;
pub use sensors::MotionSensor;

#[cfg(test)]
pub use actuator::test::{ActuatorCall, TestActuator};
#[cfg(test)]
pub use camera::test::{ShutterCall, TestCamera};
#[cfg(test)]
pub use clock::test::TestClock;
#[cfg(test)]
pub use sensors::test::{TestBattery, TestMotionSensor};

/// The collaborators driven by the interpreter.
///
/// Each device is owned exclusively; the interpreter is the only caller.
///
/// # Type Parameters
///
/// - `A`: the [Actuator] moving both axes.
/// - `C`: the [Camera].
/// - `M`: the [MotionSensor].
/// - `B`: the [Battery] sensor.
/// - `K`: the [Clock].
pub struct Devices<A, C, M, B, K> {
    pub actuator: A,
    pub camera: C,
    pub motion_sensor: M,
    pub battery: B,
    pub clock: K,
}
