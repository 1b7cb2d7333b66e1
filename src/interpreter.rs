use log::{debug, trace, warn};
use ufmt::{uWrite, uwriteln};

use crate::command::{
    CommandState, Coords, Effect, MotionMode, NonModal, SpeedMode, WaitMode,
};
use crate::config::{Config, UnknownCodes};
use crate::devices::{
    Actuator, Battery, Camera, Clock, Devices, MotionSensor, SpeedProfile,
};
use crate::error::Error;
use crate::gcode::Tokenizer;
use crate::motion::MotionResolver;
use crate::position::Position;
use crate::status::{Flag, Hundredths};

/// Name reported by `M115`.
pub const FIRMWARE_NAME: &str = "PanoController";

/// Version reported by `M115`.
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How the program should continue after a line.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    /// Carry on with the next line.
    Continue,
    /// `M0`, or `M1` with the stop condition met: wait for the user.
    Stop,
    /// `M2`: the program is over.
    End,
}

/// Command interpreter for the pan-tilt rig.
///
/// The interpreter owns the rig's devices. The [CommandState] is owned by
/// the caller and handed in with every line, so several independent
/// interpreters can run side by side.
///
/// # Type Parameters
///
/// See [Devices].
pub struct Interpreter<A, C, M, B, K> {
    config: Config,
    devices: Devices<A, C, M, B, K>,
    resolver: MotionResolver,
}

impl<A, C, M, B, K> Interpreter<A, C, M, B, K>
where
    A: Actuator,
    C: Camera,
    M: MotionSensor,
    B: Battery,
    K: Clock,
{
    /// Creates a new interpreter.
    pub fn new(config: Config, devices: Devices<A, C, M, B, K>) -> Self {
        let resolver = MotionResolver::new(config.gear_ratios);
        Self {
            config,
            devices,
            resolver,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn devices(&self) -> &Devices<A, C, M, B, K> {
        &self.devices
    }

    pub fn devices_mut(&mut self) -> &mut Devices<A, C, M, B, K> {
        &mut self.devices
    }

    /// Parses and executes one command line.
    ///
    /// The line's words are applied to `state`, then every operation they
    /// imply runs in a fixed order: speed profile, zero-motion wait,
    /// shutter, dwell, origin reset, origin shift, motor power, homing, the
    /// move itself, status queries and finally the program flow request.
    /// Status lines are written to `out`.
    ///
    /// # Parameters
    ///
    /// - `state`: State carried over from the previous lines.
    /// - `line`: The command line, like `"G1 G91 A5.3 C-0.5"`.
    /// - `out`: Sink for status lines.
    ///
    /// # Returns
    ///
    /// - `Ok(outcome)`: if the line was executed.
    /// - `Err(Error::UnrecognizedCode(_))`: if the line was refused; the
    ///   state is untouched.
    /// - `Err(Error::Output(_))`: if the line was executed, but writing a
    ///   status line failed.
    pub fn execute<W>(
        &mut self,
        state: &mut CommandState,
        line: &str,
        out: &mut W,
    ) -> Result<Outcome, Error<W::Error>>
    where
        W: uWrite + ?Sized,
    {
        if self.config.unknown_codes == UnknownCodes::Reject {
            let mut words = Tokenizer::new(line);
            if let Some(word) =
                words.find(|word| Effect::from_word(*word).is_none())
            {
                return Err(Error::UnrecognizedCode(word));
            }
        }

        state.begin_line();
        for word in Tokenizer::new(line) {
            match Effect::from_word(word) {
                Some(effect) => state.apply(effect),
                None => trace!(
                    "line {}: ignoring {}{}",
                    state.line_number,
                    word.letter,
                    word.value
                ),
            }
        }
        debug!(
            "line {}: {:?} {:?} target={:?} ops={:?}",
            state.line_number,
            state.motion,
            state.coords,
            state.target,
            state.nonmodal
        );

        self.run(state, out).map_err(Error::Output)
    }

    /// Runs the operations of a line, in order.
    ///
    /// A failed status write does not stop later operations; the first
    /// failure is returned once everything has run.
    fn run<W>(
        &mut self,
        state: &mut CommandState,
        out: &mut W,
    ) -> Result<Outcome, W::Error>
    where
        W: uWrite + ?Sized,
    {
        let ops = state.nonmodal;
        let mut written = Ok(());

        self.select_speed_profile(state.speed);
        if ops.contains(NonModal::QueryZeroMotionWait) {
            written = written.and(self.zero_motion_wait(state, out));
        }
        if ops.contains(NonModal::Shutter) {
            self.shutter(state);
        }
        if ops.contains(NonModal::Dwell) {
            self.dwell(state);
        }
        if ops.contains(NonModal::ResetOrigin) {
            reset_origin(state);
        }
        if ops.contains(NonModal::ShiftOrigin) {
            shift_origin(state);
        }
        self.power_motors(state.motors_enabled);
        if ops.contains(NonModal::GoOrigin) {
            self.go_origin(state);
        }
        self.primary_move(state);

        if ops.contains(NonModal::QueryVersion) {
            written = written.and(write_version(out));
        }
        if ops.contains(NonModal::QuerySettings) {
            written = written.and(self.write_settings(state, out));
        }
        if ops.contains(NonModal::QueryOrigin) {
            written = written.and(write_origin(state, out));
        }
        if ops.contains(NonModal::QueryPosition) {
            written = written.and(write_position(state, out));
        }

        let outcome = self.outcome(state.wait);
        written = written.and(write_outcome(outcome, out));

        written.map(|()| outcome)
    }

    fn select_speed_profile(&mut self, speed: SpeedMode) {
        let profile = match speed {
            SpeedMode::Constant => SpeedProfile::Constant,
            SpeedMode::Accelerated => SpeedProfile::Accelerated {
                accel: self.config.accel,
                decel: self.config.decel,
            },
        };
        self.devices.actuator.set_speed_profile(profile);
    }

    /// `M116`: wait for the rig to settle, and report how long it took.
    fn zero_motion_wait<W>(
        &mut self,
        state: &CommandState,
        out: &mut W,
    ) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let settle_ms = duration_ms(100.0 * state.q);
        let timeout_ms = duration_ms(1000.0 * state.p);

        let start = self.devices.clock.now_ms();
        let settled = self
            .devices
            .motion_sensor
            .zero_motion_wait(settle_ms, timeout_ms);
        let elapsed = self.devices.clock.now_ms().wrapping_sub(start);

        if settled {
            uwriteln!(out, "ZM={}", elapsed)
        } else {
            warn!("zero-motion wait timed out after {} ms", elapsed);
            uwriteln!(out, "ZM={} (failed)", elapsed)
        }
    }

    /// `M240`: take a picture, then optionally let the rig settle.
    fn shutter(&mut self, state: &CommandState) {
        let bulb = state.q != 0.0;
        self.devices
            .camera
            .shutter(duration_ms(1000.0 * state.p), bulb);
        if state.r > 0.0 {
            self.devices.clock.delay_ms(duration_ms(1000.0 * state.r));
        }
    }

    /// `G4`: pause.
    fn dwell(&mut self, state: &CommandState) {
        self.devices.clock.delay_ms(duration_ms(1000.0 * state.p));
    }

    fn power_motors(&mut self, enabled: bool) {
        if enabled {
            self.devices.actuator.enable();
        } else {
            self.devices.actuator.disable();
        }
    }

    /// `G28`: return to the origin, through the line's target if it has one.
    fn go_origin(&mut self, state: &mut CommandState) {
        let waypoint = state.target;
        if !waypoint.is_zero() {
            self.move_to(state, Coords::Relative, waypoint);
        }
        let origin = state.origin;
        self.move_to(state, Coords::Absolute, origin);
        state.target = Position::ZERO;
    }

    /// Moves to the line's target if a motion mode is active.
    fn primary_move(&mut self, state: &mut CommandState) {
        let (coords, target) = (state.coords, state.target);
        match state.motion {
            MotionMode::Rapid | MotionMode::Linear if !target.is_zero() => {
                self.move_to(state, coords, target);
            }
            _ => {}
        }
    }

    /// Resolves a move, hands the rotation to the actuator, and records the
    /// new position.
    fn move_to(
        &mut self,
        state: &mut CommandState,
        coords: Coords,
        target: Position,
    ) {
        let resolution =
            self.resolver
                .resolve(state.motion, coords, state.current, target);
        trace!(
            "line {}: {:?} {:?} rotate {:?}",
            state.line_number,
            resolution.mode,
            coords,
            resolution.delta
        );
        self.devices.actuator.rotate(resolution.delta);
        state.current = resolution.current;
    }

    /// `M503`
    fn write_settings<W>(
        &mut self,
        state: &CommandState,
        out: &mut W,
    ) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let gears = self.resolver.gear_ratios();
        let battery = self.devices.battery.voltage();
        let camera = &self.devices.camera;

        uwriteln!(out, "GearRatioA=1:{}", gears.horiz)?;
        uwriteln!(out, "GearRatioC=1:{}", gears.vert)?;
        uwriteln!(out, "Battery={}", Hundredths(battery))?;
        uwriteln!(
            out,
            "ShutterConnected={}",
            Flag(camera.is_shutter_connected())
        )?;
        uwriteln!(out, "FocusConnected={}", Flag(camera.is_focus_connected()))?;
        uwriteln!(out, "MotorsEnabled={}", Flag(state.motors_enabled))?;
        uwriteln!(out, "MotionMode={}", state.motion)?;
        uwriteln!(out, "Distance={}", state.coords)?;
        uwriteln!(out, "Speed={}", state.speed)
    }

    fn outcome(&mut self, wait: WaitMode) -> Outcome {
        match wait {
            WaitMode::None => Outcome::Continue,
            WaitMode::PauseForUser => Outcome::Stop,
            WaitMode::StopIfButton if self.stop_requested() => Outcome::Stop,
            WaitMode::StopIfButton => Outcome::Continue,
            WaitMode::EndProgram => Outcome::End,
        }
    }

    /// Condition for an optional stop (`M1`).
    fn stop_requested(&mut self) -> bool {
        // TODO: poll the stop button once the rig exposes it as an input.
        false
    }
}

/// `G92.1`: put the origin back where the rig is, and forget the target.
fn reset_origin(state: &mut CommandState) {
    state.origin = Position::ZERO;
    state.target = Position::ZERO;
    state.current = Position::ZERO;
}

/// `G92`: declare that the rig is at the line's target.
fn shift_origin(state: &mut CommandState) {
    state.origin = state.origin - (state.target + state.current);
    state.current = state.target;
    state.target = Position::ZERO;
}

/// `M115`
fn write_version<W>(out: &mut W) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    uwriteln!(out, "{} {}", FIRMWARE_NAME, FIRMWARE_VERSION)?;
    uwriteln!(out, "Options=CAMERA BATT ZM")?;
    uwriteln!(out, "Axis=A C")
}

/// `M117`
fn write_origin<W>(state: &CommandState, out: &mut W) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    uwriteln!(out, "OriginA={}", Hundredths(state.origin.horiz))?;
    uwriteln!(out, "OriginC={}", Hundredths(state.origin.vert))
}

/// `M114`
fn write_position<W>(state: &CommandState, out: &mut W) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    uwriteln!(out, "CurrentA={}", Hundredths(state.current.horiz))?;
    uwriteln!(out, "CurrentC={}", Hundredths(state.current.vert))
}

fn write_outcome<W>(outcome: Outcome, out: &mut W) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    match outcome {
        Outcome::Continue => Ok(()),
        Outcome::Stop => uwriteln!(out, "STOP"),
        Outcome::End => uwriteln!(out, "END"),
    }
}

/// Converts a duration to whole milliseconds. Negative durations are zero.
fn duration_ms(ms: f32) -> u32 {
    ms as u32
}
