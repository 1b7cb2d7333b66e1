use crate::motion::GearRatios;

/// What to do with words the interpreter does not recognize.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnknownCodes {
    /// Drop them silently and execute the rest of the line.
    #[default]
    Ignore,
    /// Refuse the whole line with [crate::Error::UnrecognizedCode].
    Reject,
}

/// Rig configuration.
///
/// The defaults are the reference rig: 1:8 horizontal and 1:32 vertical
/// gearing.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Degrees to actuator units, per axis.
    pub gear_ratios: GearRatios,
    /// Acceleration of the accelerated speed profile.
    pub accel: u16,
    /// Deceleration of the accelerated speed profile.
    pub decel: u16,
    pub unknown_codes: UnknownCodes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gear_ratios: GearRatios::default(),
            accel: 1000,
            decel: 1000,
            unknown_codes: UnknownCodes::Ignore,
        }
    }
}
