use super::SimClock;
use log::{debug, info, warn};
use pano_gcode::{Actuator, Rotation, SpeedProfile};
use std::cell::Cell;
use std::rc::Rc;

/// Actuator which logs rotations and keeps a running total of them.
pub struct SimActuator {
    clock: SimClock,
    still_at_ms: Rc<Cell<u64>>,
    residual_motion_ms: u32,
    enabled: bool,
    profile: Option<SpeedProfile>,
    total: Rotation,
}

impl SimActuator {
    pub fn new(
        clock: SimClock,
        still_at_ms: Rc<Cell<u64>>,
        residual_motion_ms: u32,
    ) -> Self {
        Self {
            clock,
            still_at_ms,
            residual_motion_ms,
            enabled: false,
            profile: None,
            total: Rotation::default(),
        }
    }

    /// Sum of every rotation so far, in actuator units.
    pub fn total(&self) -> Rotation {
        self.total
    }
}

impl Actuator for SimActuator {
    fn enable(&mut self) {
        if !self.enabled {
            info!("motors enabled");
        }
        self.enabled = true;
    }

    fn disable(&mut self) {
        if self.enabled {
            info!("motors disabled");
        }
        self.enabled = false;
    }

    fn rotate(&mut self, rotation: Rotation) {
        if !self.enabled {
            warn!("rotating with the motors disabled");
        }
        self.total.horiz += rotation.horiz;
        self.total.vert += rotation.vert;
        info!(
            "rotate A={:.2} C={:.2} (total A={:.2} C={:.2})",
            rotation.horiz, rotation.vert, self.total.horiz, self.total.vert
        );
        self.still_at_ms
            .set(self.clock.elapsed_ms() + self.residual_motion_ms as u64);
    }

    fn set_speed_profile(&mut self, profile: SpeedProfile) {
        if self.profile != Some(profile) {
            debug!("speed profile {:?}", profile);
        }
        self.profile = Some(profile);
    }
}
