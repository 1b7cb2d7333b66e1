use core::ops::{Add, Sub};

/// Rotational axis of the rig.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    /// Horizontal (pan) axis, addressed by the `A` letter.
    Horiz,
    /// Vertical (tilt) axis, addressed by the `C` letter.
    Vert,
}
impl Axis {
    /// Returns the command letter for the axis.
    pub fn letter(&self) -> char {
        match self {
            Axis::Horiz => 'A',
            Axis::Vert => 'C',
        }
    }
}

/// Pair of angles, in degrees.
///
/// Used for the target, origin and current position of the rig.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct Position {
    pub horiz: f32,
    pub vert: f32,
}
impl Position {
    /// Both axes at zero degrees.
    pub const ZERO: Position = Position::new(0.0, 0.0);

    /// Creates a new `Position`.
    pub const fn new(horiz: f32, vert: f32) -> Self {
        Self { horiz, vert }
    }

    /// Returns `true` if both axes are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.horiz == 0.0 && self.vert == 0.0
    }

    /// Returns the angle for one axis.
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horiz => self.horiz,
            Axis::Vert => self.vert,
        }
    }

    /// Sets the angle for one axis.
    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horiz => self.horiz = value,
            Axis::Vert => self.vert = value,
        }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Position::new(self.horiz + rhs.horiz, self.vert + rhs.vert)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Position::new(self.horiz - rhs.horiz, self.vert - rhs.vert)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating angles with at most two decimal places.
    ///
    /// Keeping to hundredths of a degree keeps `f32` sums exact enough for
    /// equality checks after scaling.
    pub fn angle() -> impl Strategy<Value = f32> {
        (-36000i32..36000i32).prop_map(|h| h as f32 / 100.0)
    }

    /// Strategy for generating [Position].
    pub fn position() -> impl Strategy<Value = Position> {
        (angle(), angle()).prop_map(|(h, v)| Position::new(h, v))
    }

    #[test]
    fn test_zero() {
        assert!(Position::ZERO.is_zero());
        assert!(!Position::new(0.0, -0.5).is_zero());
        assert!(!Position::new(1.0, 0.0).is_zero());
    }

    #[test]
    fn test_get_set() {
        let mut p = Position::ZERO;
        p.set(Axis::Horiz, 5.3);
        p.set(Axis::Vert, -0.5);
        assert_eq!(5.3, p.get(Axis::Horiz));
        assert_eq!(-0.5, p.get(Axis::Vert));
        assert_eq!(Position::new(5.3, -0.5), p);
    }

    #[test]
    fn test_axis_letters() {
        assert_eq!('A', Axis::Horiz.letter());
        assert_eq!('C', Axis::Vert.letter());
    }

    proptest! {
        #[test]
        fn test_add_sub(a in position(), b in position()) {
            let sum = a + b;
            prop_assert_eq!(a.horiz + b.horiz, sum.horiz);
            prop_assert_eq!(a.vert + b.vert, sum.vert);
            let diff = a - b;
            prop_assert_eq!(a.horiz - b.horiz, diff.horiz);
            prop_assert_eq!(a.vert - b.vert, diff.vert);
        }
    }
}
