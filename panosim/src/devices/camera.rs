use super::SimClock;
use log::info;
use pano_gcode::Camera;

/// Camera whose exposures take simulated time.
pub struct SimCamera {
    clock: SimClock,
    shutter_connected: bool,
    focus_connected: bool,
    exposures: u32,
}

impl SimCamera {
    pub fn new(
        clock: SimClock,
        shutter_connected: bool,
        focus_connected: bool,
    ) -> Self {
        Self {
            clock,
            shutter_connected,
            focus_connected,
            exposures: 0,
        }
    }

    pub fn exposures(&self) -> u32 {
        self.exposures
    }
}

impl Camera for SimCamera {
    fn shutter(&mut self, duration_ms: u32, bulb: bool) {
        self.exposures += 1;
        info!(
            "exposure #{}: {} ms{}",
            self.exposures,
            duration_ms,
            if bulb { " (bulb)" } else { "" }
        );
        self.clock.advance_ms(duration_ms as u64);
    }

    fn is_shutter_connected(&self) -> bool {
        self.shutter_connected
    }

    fn is_focus_connected(&self) -> bool {
        self.focus_connected
    }
}
