//! Command interpreter for a motorized pan-tilt camera rig.
//!
//! Command lines are a small dialect of G-code, like `G1 G91 A5.3 C-0.5`.
//! `A` is the horizontal axis and `C` the vertical axis, both in degrees.
#![cfg_attr(not(test), no_std)]

mod command;
mod config;
mod devices;
mod error;
mod gcode;
mod interpreter;
mod motion;
mod position;
mod status;

pub use command::CommandState;
pub use command::Coords;
pub use command::Effect;
pub use command::MotionMode;
pub use command::NonModal;
pub use command::NonModalSet;
pub use command::Param;
pub use command::SpeedMode;
pub use command::WaitMode;
pub use config::Config;
pub use config::UnknownCodes;
pub use devices::Actuator;
pub use devices::Battery;
pub use devices::Camera;
pub use devices::Clock;
pub use devices::Devices;
pub use devices::MotionSensor;
pub use devices::SpeedProfile;
pub use error::Error;
pub use gcode::Tokenizer;
pub use gcode::Word;
pub use interpreter::Interpreter;
pub use interpreter::Outcome;
pub use interpreter::FIRMWARE_NAME;
pub use interpreter::FIRMWARE_VERSION;
pub use motion::GearRatios;
pub use motion::MotionResolver;
pub use motion::Resolution;
pub use motion::Rotation;
pub use position::Axis;
pub use position::Position;
