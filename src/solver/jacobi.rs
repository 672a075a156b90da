use crate::log::{debug, info, warn, Logger};
use crate::solver::boundary::BoundaryCondition;
use crate::solver::grid::Grid;
use crate::solver::observer::Observer;
use crate::solver::stencil;
use crate::types::*;

pub const DEFAULT_SIZE: usize = 4;
pub const DEFAULT_EPSILON: Scalar = 0.0001;
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000;

/// Startup parameters of the solver. Validated once on `build()`.
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SolverConfig {
    /// Interior cells per dimension.
    #[builder(default = "DEFAULT_SIZE")]
    pub n: usize,

    /// Convergence threshold on the maximum change of one sweep.
    /// Values `<= 0` never converge.
    #[builder(default = "DEFAULT_EPSILON")]
    pub epsilon: Scalar,

    #[builder(default = "DEFAULT_MAX_ITERATIONS")]
    pub max_iterations: u64,

    #[builder(default)]
    pub boundary: BoundaryCondition,
}

impl SolverConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(n) = self.n {
            if n == 0 {
                return Err("Grid size must be at least 1.".into());
            }

            // Two buffers of `(n + 2)^2` cells, each within an allocation limit.
            let bytes = n
                .checked_add(2)
                .and_then(|d| d.checked_mul(d))
                .and_then(|c| c.checked_mul(std::mem::size_of::<Scalar>()))
                .filter(|b| *b <= isize::MAX as usize);

            if bytes.is_none() {
                return Err(format!("Grid size '{}' is too large.", n));
            }
        }

        if self.max_iterations == Some(0) {
            return Err("Maximum iterations must be at least 1.".into());
        }

        if let Some(epsilon) = self.epsilon {
            if epsilon.is_nan() {
                return Err("Epsilon is not a number.".into());
            }
        }

        if let Some(boundary) = self.boundary {
            if !boundary.temperature.is_finite() {
                return Err(format!(
                    "Edge temperature '{}' is not finite.",
                    boundary.temperature
                ));
            }
        }

        return Ok(());
    }
}

impl SolverConfig {
    pub fn builder() -> SolverConfigBuilder {
        return SolverConfigBuilder::default();
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        return SolverConfig {
            n: DEFAULT_SIZE,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            boundary: BoundaryCondition::default(),
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IterationState {
    /// Number of completed sweeps.
    pub iteration: u64,

    /// Maximum absolute change of the last sweep.
    pub max_delta: Scalar,

    pub converged: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolverState {
    Running,
    Converged,
    MaxIterationsExceeded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub iterations: u64,
    pub max_delta: Scalar,

    /// Grid computed by the last sweep, boundary included.
    pub grid: Grid,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Converged(Report),
    MaxIterationsExceeded(Report),
}

impl Outcome {
    pub fn is_converged(&self) -> bool {
        return matches!(self, Outcome::Converged(_));
    }

    pub fn report(&self) -> &Report {
        return match self {
            Outcome::Converged(r) | Outcome::MaxIterationsExceeded(r) => r,
        };
    }

    pub fn iterations(&self) -> u64 {
        return self.report().iterations;
    }
}

/// Jacobi relaxation of the Laplace equation on a square grid.
///
/// Holds two grids: `back` is the last completed state and is read by the
/// stencil, `front` receives the new interior values. Both carry the same
/// boundary, which the stencil never writes, so swapping them after every
/// sweep commits the new state.
pub struct Solver<'a> {
    config: SolverConfig,

    grids: FrontBackBuffer<Grid>,
    state: IterationState,
    status: SolverState,

    log: &'a Logger,
}

impl<'a> Solver<'a> {
    pub fn new(log: &'a Logger, config: SolverConfig) -> Self {
        info!(
            log,
            "Grid: {} x {} interior cells, epsilon: {:e}, max. iterations: {}, heated edge: {:?} at {}",
            config.n,
            config.n,
            config.epsilon,
            config.max_iterations,
            config.boundary.edge,
            config.boundary.temperature
        );

        let grid = config.boundary.initialize(config.n);

        return Solver {
            grids: FrontBackBuffer::new(grid.clone(), grid),
            config,
            state: IterationState::default(),
            status: SolverState::Running,
            log,
        };
    }

    pub fn config(&self) -> &SolverConfig {
        return &self.config;
    }

    /// The latest state: the initial grid before the first sweep and
    /// afterwards the grid computed by the last sweep.
    pub fn grid(&self) -> &Grid {
        return &self.grids.back;
    }

    pub fn state(&self) -> &IterationState {
        return &self.state;
    }

    pub fn status(&self) -> SolverState {
        return self.status;
    }

    /// Back to the initial grids and iteration `0`.
    pub fn reset(&mut self) {
        debug!(self.log, "Reset solver.");

        let grid = self.config.boundary.initialize(self.config.n);
        self.grids = FrontBackBuffer::new(grid.clone(), grid);
        self.state = IterationState::default();
        self.status = SolverState::Running;
    }

    /// Runs one sweep, the convergence test and the commit.
    /// Does nothing once a terminal state is reached.
    pub fn step(&mut self) -> SolverState {
        if self.status != SolverState::Running {
            return self.status;
        }

        let (current, next) = self.grids.split();
        let max_delta = stencil::sweep(current, next);
        self.grids.swap();

        self.state.iteration += 1;
        self.state.max_delta = max_delta;
        self.state.converged = stencil::converged(max_delta, self.config.epsilon);

        debug!(
            self.log,
            "Iteration: {}, max. delta: {:.6}", self.state.iteration, max_delta
        );

        self.status = if self.state.converged {
            SolverState::Converged
        } else if self.state.iteration >= self.config.max_iterations {
            SolverState::MaxIterationsExceeded
        } else {
            SolverState::Running
        };

        return self.status;
    }

    /// `None` while still running.
    pub fn outcome(&self) -> Option<Outcome> {
        let report = || Report {
            iterations: self.state.iteration,
            max_delta: self.state.max_delta,
            grid: self.grid().clone(),
        };

        return match self.status {
            SolverState::Running => None,
            SolverState::Converged => Some(Outcome::Converged(report())),
            SolverState::MaxIterationsExceeded => Some(Outcome::MaxIterationsExceeded(report())),
        };
    }

    pub fn solve(&mut self) -> Outcome {
        return self.solve_observed(&mut ());
    }

    /// Sweeps until convergence or until the iteration cap is reached.
    pub fn solve_observed(&mut self, observer: &mut dyn Observer) -> Outcome {
        observer.start(self.log, self.grid());

        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }

            self.step();
            observer.sweep(self.log, &self.state, self.grid());
        };

        match &outcome {
            Outcome::Converged(r) => info!(
                self.log,
                "Converged after {} iterations, max. delta: {:e}.", r.iterations, r.max_delta
            ),
            Outcome::MaxIterationsExceeded(r) => warn!(
                self.log,
                "Not converged after {} iterations, max. delta: {:e} (epsilon: {:e}).",
                r.iterations,
                r.max_delta,
                self.config.epsilon
            ),
        }

        self.grid().log_stats(self.log);
        observer.finish(self.log, &outcome);

        return outcome;
    }
}
