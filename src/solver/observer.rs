use crate::log::Logger;
use crate::solver::grid::Grid;
use crate::solver::jacobi::{IterationState, Outcome};
use std::time::{Duration, Instant};

/// Hooks called synchronously by the solver loop.
/// Implementations must not block on external input.
pub trait Observer {
    /// Before the first sweep, with the initial grid.
    fn start(&mut self, _log: &Logger, _grid: &Grid) {}

    /// After each completed sweep, with the freshly computed grid.
    fn sweep(&mut self, _log: &Logger, _state: &IterationState, _grid: &Grid) {}

    /// Once the loop terminated.
    fn finish(&mut self, _log: &Logger, _outcome: &Outcome) {}
}

impl Observer for () {}

impl<A: Observer, B: Observer> Observer for (A, B) {
    fn start(&mut self, log: &Logger, grid: &Grid) {
        self.0.start(log, grid);
        self.1.start(log, grid);
    }

    fn sweep(&mut self, log: &Logger, state: &IterationState, grid: &Grid) {
        self.0.sweep(log, state, grid);
        self.1.sweep(log, state, grid);
    }

    fn finish(&mut self, log: &Logger, outcome: &Outcome) {
        self.0.finish(log, outcome);
        self.1.finish(log, outcome);
    }
}

/// Measures the wall-clock time between `start` and `finish`.
#[derive(Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        return Stopwatch::default();
    }

    /// `None` until the solver loop finished.
    pub fn elapsed(&self) -> Option<Duration> {
        return self.elapsed;
    }
}

impl Observer for Stopwatch {
    fn start(&mut self, _log: &Logger, _grid: &Grid) {
        self.started = Some(Instant::now());
        self.elapsed = None;
    }

    fn finish(&mut self, _log: &Logger, _outcome: &Outcome) {
        self.elapsed = self.started.map(|s| s.elapsed());
    }
}
