use crate::config::SimConfig;
use crate::devices::{
    self, SimActuator, SimBattery, SimCamera, SimClock, SimMotionSensor,
};
use log::{info, warn};
use pano_gcode::{
    CommandState, Error, Interpreter, Outcome, FIRMWARE_NAME, FIRMWARE_VERSION,
};
use std::io::{self, BufRead, Write};
use ufmt::{uWrite, uwriteln};

/// Status output onto an [io::Write].
pub struct Console<W>(pub W);

impl<W: Write> uWrite for Console<W> {
    type Error = io::Error;

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.0.write_all(s.as_bytes())
    }
}

/// A simulated rig running G-code programs.
pub struct Machine<W> {
    interpreter: Interpreter<
        SimActuator,
        SimCamera,
        SimMotionSensor,
        SimBattery,
        SimClock,
    >,
    state: CommandState,
    console: Console<W>,
}

impl<W: Write> Machine<W> {
    pub fn new(config: &SimConfig, out: W) -> Self {
        let devices = devices::build(&config.devices);
        Self {
            interpreter: Interpreter::new(config.rig.clone(), devices),
            state: CommandState::new(),
            console: Console(out),
        }
    }

    pub fn output(&self) -> &W {
        &self.console.0
    }

    pub fn state(&self) -> &CommandState {
        &self.state
    }

    /// Announce the machine!
    pub fn announce(&mut self) -> io::Result<()> {
        uwriteln!(
            &mut self.console,
            "{} {} (simulated)",
            FIRMWARE_NAME,
            FIRMWARE_VERSION
        )
    }

    /// Runs a program until it ends or the input runs out.
    ///
    /// # Parameters
    ///
    /// - `program`: Source of command lines.
    /// - `pause`: Called when the program stops for the user. Blocks until
    ///   the user resumes.
    pub fn run<R, P>(&mut self, program: R, mut pause: P) -> anyhow::Result<()>
    where
        R: BufRead,
        P: FnMut() -> io::Result<()>,
    {
        for line in program.lines() {
            match self.run_line(&line?)? {
                Outcome::Continue => {}
                Outcome::Stop => {
                    info!("program stopped, waiting for the user");
                    self.console.0.flush()?;
                    pause()?;
                }
                Outcome::End => {
                    info!("program ended");
                    break;
                }
            }
        }
        self.console.0.flush()?;
        self.report();
        Ok(())
    }

    /// Executes one line.
    ///
    /// Refused lines are reported on the console and the program carries
    /// on. Failing to write the console is fatal.
    pub fn run_line(&mut self, line: &str) -> anyhow::Result<Outcome> {
        let result =
            self.interpreter
                .execute(&mut self.state, line, &mut self.console);
        match result {
            Ok(outcome) => Ok(outcome),
            Err(err @ Error::UnrecognizedCode(_)) => {
                warn!("line {}: {}", self.state.line_number, err);
                let message = err.to_string();
                uwriteln!(&mut self.console, "ERROR: {}", message.as_str())?;
                Ok(Outcome::Continue)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn report(&self) {
        let devices = self.interpreter.devices();
        let total = devices.actuator.total();
        info!(
            "{} lines, {} exposures, total rotation A={:.2} C={:.2}, {} ms",
            self.state.line_number,
            devices.camera.exposures(),
            total.horiz,
            total.vert,
            devices.clock.elapsed_ms()
        );
    }
}
