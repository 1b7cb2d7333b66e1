use crate::command::{Coords, MotionMode};
use crate::position::Position;

/// Per-axis multipliers from logical degrees to actuator units.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GearRatios {
    pub horiz: i32,
    pub vert: i32,
}
impl GearRatios {
    pub const fn new(horiz: i32, vert: i32) -> Self {
        Self { horiz, vert }
    }
}

impl Default for GearRatios {
    fn default() -> Self {
        Self::new(8, 32)
    }
}

/// A combined two-axis rotation, in actuator units.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct Rotation {
    pub horiz: f32,
    pub vert: f32,
}
impl Rotation {
    pub const fn new(horiz: f32, vert: f32) -> Self {
        Self { horiz, vert }
    }
}

/// Result of resolving a move.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Resolution {
    /// Motion mode the move was requested with.
    pub mode: MotionMode,
    /// Rotation to hand to the actuator.
    pub delta: Rotation,
    /// Position of the rig once the rotation is done.
    pub current: Position,
}

/// Converts logical target positions into actuator rotations.
pub struct MotionResolver {
    gear_ratios: GearRatios,
}

impl MotionResolver {
    pub fn new(gear_ratios: GearRatios) -> Self {
        Self { gear_ratios }
    }

    pub fn gear_ratios(&self) -> GearRatios {
        self.gear_ratios
    }

    /// Computes the rotation for a move and the position it ends at.
    ///
    /// # Parameters
    ///
    /// - `mode`: Motion mode of the move.
    /// - `coords`: Whether `target` is an offset (relative) or a position
    ///   (absolute).
    /// - `current`: Current position, in degrees.
    /// - `target`: Target, in degrees.
    pub fn resolve(
        &self,
        mode: MotionMode,
        coords: Coords,
        current: Position,
        target: Position,
    ) -> Resolution {
        let (offset, end) = match coords {
            Coords::Relative => (target, current + target),
            Coords::Absolute => (target - current, target),
        };
        Resolution {
            mode,
            delta: self.to_rotation(offset),
            current: end,
        }
    }

    /// Converts an angular offset, in degrees, to a [Rotation].
    pub fn to_rotation(&self, offset: Position) -> Rotation {
        Rotation::new(
            offset.horiz * self.gear_ratios.horiz as f32,
            offset.vert * self.gear_ratios.vert as f32,
        )
    }
}
