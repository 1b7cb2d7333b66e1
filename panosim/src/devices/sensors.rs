use super::SimClock;
use log::debug;
use pano_gcode::{Battery, MotionSensor};
use std::cell::Cell;
use std::rc::Rc;

/// Motion sensor which sees the rig move until a while after each
/// rotation.
pub struct SimMotionSensor {
    clock: SimClock,
    still_at_ms: Rc<Cell<u64>>,
}

impl SimMotionSensor {
    pub fn new(clock: SimClock, still_at_ms: Rc<Cell<u64>>) -> Self {
        Self { clock, still_at_ms }
    }
}

impl MotionSensor for SimMotionSensor {
    fn zero_motion_wait(&mut self, settle_ms: u32, timeout_ms: u32) -> bool {
        let start = self.clock.elapsed_ms();
        let settled_at = self.still_at_ms.get().max(start) + settle_ms as u64;
        let needed = settled_at - start;
        debug!("rig settles in {} ms, timeout {} ms", needed, timeout_ms);
        if needed <= timeout_ms as u64 {
            self.clock.advance_ms(needed);
            true
        } else {
            self.clock.advance_ms(timeout_ms as u64);
            false
        }
    }
}

/// Battery with a fixed voltage.
pub struct SimBattery {
    volts: f32,
}

impl SimBattery {
    pub fn new(volts: f32) -> Self {
        Self { volts }
    }
}

impl Battery for SimBattery {
    fn voltage(&mut self) -> f32 {
        self.volts
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_motion_wait() {
        let clock = SimClock::new(false);
        let still_at_ms = Rc::new(Cell::new(300));
        let mut sensor = SimMotionSensor::new(clock.clone(), still_at_ms);

        assert!(sensor.zero_motion_wait(100, 1000));
        assert_eq!(400, clock.elapsed_ms());

        // Already still: only the settle time is needed.
        assert!(sensor.zero_motion_wait(100, 1000));
        assert_eq!(500, clock.elapsed_ms());

        assert!(!sensor.zero_motion_wait(500, 200));
        assert_eq!(700, clock.elapsed_ms());
    }
}
