use core::fmt;

use crate::gcode::Word;
use crate::position::{Axis, Position};

/// Modal motion mode, set by `G0`, `G1` and cancelled by `G80`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum MotionMode {
    /// No motion mode; axis words alone do not move the rig.
    #[default]
    None,
    /// `G0`: rapid move.
    Rapid,
    /// `G1`: linear move.
    Linear,
}

/// Modal coordinate convention, set by `G90` / `G91`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Coords {
    /// `G90`: axis words are positions.
    #[default]
    Absolute,
    /// `G91`: axis words are offsets from the current position.
    Relative,
}

/// Modal speed profile, set by `M320` / `M321`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum SpeedMode {
    /// `M320`: accelerate and decelerate around each move.
    #[default]
    Accelerated,
    /// `M321`: constant speed.
    Constant,
}

/// Program flow request of a single line.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum WaitMode {
    #[default]
    None,
    /// `M0`: pause and wait for the user.
    PauseForUser,
    /// `M1`: stop if the stop button is pressed.
    StopIfButton,
    /// `M2`: end of program.
    EndProgram,
}

/// One-shot operations requested by a line.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum NonModal {
    /// `G4`
    Dwell,
    /// `G28`
    GoOrigin,
    /// `G92.1`
    ResetOrigin,
    /// `G92`
    ShiftOrigin,
    /// `M114`
    QueryPosition,
    /// `M115`
    QueryVersion,
    /// `M116`
    QueryZeroMotionWait,
    /// `M117`
    QueryOrigin,
    /// `M240`
    Shutter,
    /// `M503`
    QuerySettings,
}
impl NonModal {
    /// Every non-modal operation, in declaration order.
    pub const ALL: [NonModal; 10] = [
        NonModal::Dwell,
        NonModal::GoOrigin,
        NonModal::ResetOrigin,
        NonModal::ShiftOrigin,
        NonModal::QueryPosition,
        NonModal::QueryVersion,
        NonModal::QueryZeroMotionWait,
        NonModal::QueryOrigin,
        NonModal::Shutter,
        NonModal::QuerySettings,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of [NonModal] operations.
///
/// A single line may request any number of operations at once.
#[derive(PartialEq, Eq, Copy, Clone, Default)]
pub struct NonModalSet(u16);
impl NonModalSet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds an operation to the set.
    pub fn insert(&mut self, op: NonModal) {
        self.0 |= op.bit();
    }

    /// Returns `true` if the set contains the operation.
    pub fn contains(&self, op: NonModal) -> bool {
        self.0 & op.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Removes every operation from the set.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterates over the operations in the set.
    pub fn iter(&self) -> impl Iterator<Item = NonModal> + '_ {
        NonModal::ALL.into_iter().filter(|op| self.contains(*op))
    }
}

impl fmt::Debug for NonModalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<NonModal> for NonModalSet {
    fn from_iter<T: IntoIterator<Item = NonModal>>(iter: T) -> Self {
        let mut set = NonModalSet::empty();
        for op in iter {
            set.insert(op);
        }
        set
    }
}

/// Scalar parameter letters.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Param {
    P,
    Q,
    R,
    /// Feed rate. Accepted, but not used by motion.
    F,
}

/// The effect of one recognized [Word] on the command state.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Effect {
    Motion(MotionMode),
    Coords(Coords),
    Speed(SpeedMode),
    Wait(WaitMode),
    Motors(bool),
    NonModal(NonModal),
    Target(Axis, f32),
    Param(Param, f32),
}
impl Effect {
    /// Classifies a word.
    ///
    /// # Returns
    ///
    /// - `Some(effect)`: if the letter, and for `G` / `M` the code, is
    ///   recognized.
    /// - `None`: if the word means nothing to the interpreter.
    pub fn from_word(word: Word) -> Option<Effect> {
        let value = word.value;
        let effect = match word.letter {
            'G' => match word.code() {
                0 => Effect::Motion(MotionMode::Rapid),
                1 => Effect::Motion(MotionMode::Linear),
                4 => Effect::NonModal(NonModal::Dwell),
                28 => Effect::NonModal(NonModal::GoOrigin),
                80 => Effect::Motion(MotionMode::None),
                90 => Effect::Coords(Coords::Absolute),
                91 => Effect::Coords(Coords::Relative),
                92 if value == 92.1 => Effect::NonModal(NonModal::ResetOrigin),
                92 => Effect::NonModal(NonModal::ShiftOrigin),
                _ => return None,
            },
            'M' => match word.code() {
                0 => Effect::Wait(WaitMode::PauseForUser),
                1 => Effect::Wait(WaitMode::StopIfButton),
                2 => Effect::Wait(WaitMode::EndProgram),
                17 => Effect::Motors(true),
                18 => Effect::Motors(false),
                114 => Effect::NonModal(NonModal::QueryPosition),
                115 => Effect::NonModal(NonModal::QueryVersion),
                116 => Effect::NonModal(NonModal::QueryZeroMotionWait),
                117 => Effect::NonModal(NonModal::QueryOrigin),
                240 => Effect::NonModal(NonModal::Shutter),
                320 => Effect::Speed(SpeedMode::Accelerated),
                321 => Effect::Speed(SpeedMode::Constant),
                503 => Effect::NonModal(NonModal::QuerySettings),
                _ => return None,
            },
            'A' => Effect::Target(Axis::Horiz, value),
            'C' => Effect::Target(Axis::Vert, value),
            'P' => Effect::Param(Param::P, value),
            'Q' => Effect::Param(Param::Q, value),
            'R' => Effect::Param(Param::R, value),
            'F' => Effect::Param(Param::F, value),
            _ => return None,
        };
        Some(effect)
    }
}

/// Interpreter state, carried from one command line to the next.
///
/// `target`, `nonmodal`, `wait` and the scalar parameters belong to a single
/// line and are cleared by [CommandState::begin_line]. Everything else
/// persists until a command changes it.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct CommandState {
    /// Axis values given on the current line.
    pub target: Position,
    /// Logical zero reference.
    pub origin: Position,
    /// Believed absolute position of the rig.
    pub current: Position,
    pub motion: MotionMode,
    pub coords: Coords,
    pub speed: SpeedMode,
    pub wait: WaitMode,
    pub nonmodal: NonModalSet,
    pub p: f32,
    pub q: f32,
    pub r: f32,
    pub f: f32,
    /// Count of executed lines, for diagnostics only.
    pub line_number: u32,
    pub motors_enabled: bool,
}
impl CommandState {
    /// Creates the start-up state: no motion mode, everything at zero and
    /// the motors disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the per-line fields and counts the new line.
    pub fn begin_line(&mut self) {
        self.target = Position::ZERO;
        self.nonmodal.clear();
        self.wait = WaitMode::None;
        self.p = 0.0;
        self.q = 0.0;
        self.r = 0.0;
        self.f = 0.0;
        self.line_number = self.line_number.wrapping_add(1);
    }

    /// Applies the effect of one word.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Motion(motion) => self.motion = motion,
            Effect::Coords(coords) => self.coords = coords,
            Effect::Speed(speed) => self.speed = speed,
            Effect::Wait(wait) => self.wait = wait,
            Effect::Motors(enabled) => self.motors_enabled = enabled,
            Effect::NonModal(op) => self.nonmodal.insert(op),
            Effect::Target(axis, value) => self.target.set(axis, value),
            Effect::Param(param, value) => match param {
                Param::P => self.p = value,
                Param::Q => self.q = value,
                Param::R => self.r = value,
                Param::F => self.f = value,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn effect(letter: char, value: f32) -> Option<Effect> {
        Effect::from_word(Word::new(letter, value))
    }

    #[test]
    fn test_initial_state() {
        let state = CommandState::new();
        assert_eq!(MotionMode::None, state.motion);
        assert_eq!(Coords::Absolute, state.coords);
        assert_eq!(SpeedMode::Accelerated, state.speed);
        assert_eq!(Position::ZERO, state.origin);
        assert_eq!(Position::ZERO, state.current);
        assert!(!state.motors_enabled);
        assert!(state.nonmodal.is_empty());
        assert_eq!(0, state.line_number);
    }

    #[test]
    fn test_g_codes() {
        use Effect::*;
        assert_eq!(Some(Motion(MotionMode::Rapid)), effect('G', 0.0));
        assert_eq!(Some(Motion(MotionMode::Linear)), effect('G', 1.0));
        assert_eq!(Some(NonModal(super::NonModal::Dwell)), effect('G', 4.0));
        assert_eq!(
            Some(NonModal(super::NonModal::GoOrigin)),
            effect('G', 28.0)
        );
        assert_eq!(Some(Motion(MotionMode::None)), effect('G', 80.0));
        assert_eq!(Some(Coords(super::Coords::Absolute)), effect('G', 90.0));
        assert_eq!(Some(Coords(super::Coords::Relative)), effect('G', 91.0));
        assert_eq!(
            Some(NonModal(super::NonModal::ShiftOrigin)),
            effect('G', 92.0)
        );
        assert_eq!(
            Some(NonModal(super::NonModal::ResetOrigin)),
            effect('G', 92.1)
        );
        assert_eq!(
            Some(NonModal(super::NonModal::ShiftOrigin)),
            effect('G', 92.2)
        );
        assert_eq!(None, effect('G', 2.0));
        assert_eq!(None, effect('G', 17.0));
    }

    #[test]
    fn test_m_codes() {
        use Effect::*;
        assert_eq!(Some(Wait(WaitMode::PauseForUser)), effect('M', 0.0));
        assert_eq!(Some(Wait(WaitMode::StopIfButton)), effect('M', 1.0));
        assert_eq!(Some(Wait(WaitMode::EndProgram)), effect('M', 2.0));
        assert_eq!(Some(Motors(true)), effect('M', 17.0));
        assert_eq!(Some(Motors(false)), effect('M', 18.0));
        assert_eq!(
            Some(NonModal(super::NonModal::QueryPosition)),
            effect('M', 114.0)
        );
        assert_eq!(
            Some(NonModal(super::NonModal::QueryVersion)),
            effect('M', 115.0)
        );
        assert_eq!(
            Some(NonModal(super::NonModal::QueryZeroMotionWait)),
            effect('M', 116.0)
        );
        assert_eq!(
            Some(NonModal(super::NonModal::QueryOrigin)),
            effect('M', 117.0)
        );
        assert_eq!(
            Some(NonModal(super::NonModal::Shutter)),
            effect('M', 240.0)
        );
        assert_eq!(Some(Speed(SpeedMode::Accelerated)), effect('M', 320.0));
        assert_eq!(Some(Speed(SpeedMode::Constant)), effect('M', 321.0));
        assert_eq!(
            Some(NonModal(super::NonModal::QuerySettings)),
            effect('M', 503.0)
        );
        assert_eq!(None, effect('M', 3.0));
        assert_eq!(None, effect('M', 999.0));
    }

    #[test]
    fn test_value_letters() {
        use Effect::*;
        assert_eq!(Some(Target(Axis::Horiz, 5.3)), effect('A', 5.3));
        assert_eq!(Some(Target(Axis::Vert, -0.5)), effect('C', -0.5));
        assert_eq!(Some(Param(super::Param::P, 2.0)), effect('P', 2.0));
        assert_eq!(Some(Param(super::Param::Q, 1.0)), effect('Q', 1.0));
        assert_eq!(Some(Param(super::Param::R, 0.5)), effect('R', 0.5));
        assert_eq!(Some(Param(super::Param::F, 100.0)), effect('F', 100.0));
        assert_eq!(None, effect('Z', 5.0));
        assert_eq!(None, effect('X', 1.0));
        assert_eq!(None, effect('B', 1.0));
    }

    #[test]
    fn test_nonmodal_set() {
        let mut set = NonModalSet::empty();
        assert!(set.is_empty());
        set.insert(NonModal::Shutter);
        set.insert(NonModal::Dwell);
        set.insert(NonModal::Shutter);
        assert!(set.contains(NonModal::Shutter));
        assert!(set.contains(NonModal::Dwell));
        assert!(!set.contains(NonModal::GoOrigin));
        assert_eq!(
            vec![NonModal::Dwell, NonModal::Shutter],
            set.iter().collect::<Vec<_>>()
        );
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_begin_line_resets_line_fields() {
        let mut state = CommandState::new();
        state.apply(Effect::Target(Axis::Horiz, 3.0));
        state.apply(Effect::NonModal(NonModal::QueryOrigin));
        state.apply(Effect::Wait(WaitMode::EndProgram));
        state.apply(Effect::Param(Param::P, 1.0));
        state.apply(Effect::Param(Param::Q, 1.0));
        state.apply(Effect::Param(Param::R, 1.0));
        state.apply(Effect::Param(Param::F, 1.0));
        state.apply(Effect::Motion(MotionMode::Linear));
        state.apply(Effect::Coords(Coords::Relative));
        state.apply(Effect::Speed(SpeedMode::Constant));
        state.apply(Effect::Motors(true));

        state.begin_line();

        assert_eq!(Position::ZERO, state.target);
        assert!(state.nonmodal.is_empty());
        assert_eq!(WaitMode::None, state.wait);
        assert_eq!((0.0, 0.0, 0.0, 0.0), (state.p, state.q, state.r, state.f));
        assert_eq!(MotionMode::Linear, state.motion);
        assert_eq!(Coords::Relative, state.coords);
        assert_eq!(SpeedMode::Constant, state.speed);
        assert!(state.motors_enabled);
        assert_eq!(1, state.line_number);
    }

    fn nonmodal() -> impl Strategy<Value = NonModal> {
        proptest::sample::select(NonModal::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_nonmodal_set_membership(
            ops in proptest::collection::vec(nonmodal(), 0..12)
        ) {
            let set: NonModalSet = ops.iter().copied().collect();
            for op in NonModal::ALL {
                prop_assert_eq!(ops.contains(&op), set.contains(op));
            }
            prop_assert_eq!(ops.is_empty(), set.is_empty());
        }
    }
}
