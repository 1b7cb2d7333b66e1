use embedded_hal::delay::DelayNs;
use pano_gcode::Clock;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

/// Clock of the simulated rig.
///
/// Runs on a virtual time line which delays advance instantly, or in
/// realtime, where delays sleep. Clones share the same time line.
#[derive(Clone)]
pub struct SimClock {
    start: Instant,
    virtual_ns: Rc<Cell<u64>>,
    realtime: bool,
}

impl SimClock {
    pub fn new(realtime: bool) -> Self {
        Self {
            start: Instant::now(),
            virtual_ns: Rc::new(Cell::new(0)),
            realtime,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        if self.realtime {
            self.start.elapsed().as_millis() as u64
        } else {
            self.virtual_ns.get() / 1_000_000
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_ns(ms * 1_000_000);
    }

    fn advance_ns(&self, ns: u64) {
        if self.realtime {
            thread::sleep(Duration::from_nanos(ns));
        } else {
            self.virtual_ns.set(self.virtual_ns.get() + ns);
        }
    }
}

impl DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        self.advance_ns(ns as u64);
    }
}

impl Clock for SimClock {
    fn now_ms(&mut self) -> u32 {
        self.elapsed_ms() as u32
    }
}
