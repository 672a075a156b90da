use crate::log::*;
use crate::plotting;
use crate::solver::grid::Grid;
use crate::solver::jacobi::{IterationState, Outcome};
use crate::solver::observer::Observer;
use crate::types::*;
use indicatif::{ProgressBar, ProgressDrawTarget};
use itertools::Itertools;

/// Renders the full grid (boundary included), one row per line.
pub fn format_grid(grid: &Grid) -> String {
    return grid
        .rows()
        .map(|row| row.iter().map(|v| format!("{:.6}", v)).join(" "))
        .join("\n");
}

/// Prints sweep reports to the terminal.
pub struct ConsoleReporter {
    print_grids: bool,
    progress: ProgressBar,
}

impl ConsoleReporter {
    pub fn new(print_grids: bool, show_progress: bool, max_iterations: u64) -> Self {
        let progress = ProgressBar::with_draw_target(
            Some(max_iterations),
            if show_progress {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );

        return ConsoleReporter {
            print_grids,
            progress,
        };
    }
}

impl Observer for ConsoleReporter {
    fn start(&mut self, log: &Logger, grid: &Grid) {
        if self.print_grids {
            info!(log, "Initial grid:\n{}", format_grid(grid));
        }
    }

    fn sweep(&mut self, log: &Logger, state: &IterationState, grid: &Grid) {
        self.progress.inc(1);

        if self.print_grids {
            info!(
                log,
                "Iteration: {}, max. delta: {:.6}\n{}",
                state.iteration,
                state.max_delta,
                format_grid(grid)
            );
        }
    }

    fn finish(&mut self, _log: &Logger, _outcome: &Outcome) {
        self.progress.finish_and_clear();
    }
}

/// Saves a heat map of `grid` normalized to its value range.
pub fn save_plot(
    log: &Logger,
    grid: &Grid,
    file: &str,
    size: Dimension2,
    text: Option<&str>,
) -> GenericResult<()> {
    let (min, max) = grid
        .as_slice()
        .iter()
        .fold((Scalar::MAX, Scalar::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

    let range = max - min;
    let temp_get = |idx: Index2| {
        if range <= 0.0 {
            return Some(0.0);
        }
        return Some((grid[idx] - min) / range);
    };

    info!(log, "Saving plot to '{}'.", file);

    return plotting::grid(size, grid.dim, temp_get, file.to_string(), None, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::boundary::BoundaryCondition;
    use crate::solver::jacobi::{Solver, SolverConfig};

    #[test]
    fn test_save_plot() -> GenericResult<()> {
        let log = create_logger();
        let outcome = Solver::new(&log, SolverConfig::default()).solve();

        let file = std::env::temp_dir().join("rsheat-test-converged.png");
        let file = file.to_string_lossy().to_string();
        save_plot(&log, &outcome.report().grid, &file, dim!(120, 120), None)?;

        assert!(std::fs::metadata(&file)?.len() > 0);
        std::fs::remove_file(&file)?;

        Ok(())
    }

    #[test]
    fn test_save_plot_constant_grid() -> GenericResult<()> {
        let log = create_logger();
        let grid = Grid::new(3);

        let file = std::env::temp_dir().join("rsheat-test-constant.png");
        let file = file.to_string_lossy().to_string();
        save_plot(&log, &grid, &file, dim!(50, 50), None)?;

        assert!(std::path::Path::new(&file).exists());
        std::fs::remove_file(&file)?;

        Ok(())
    }

    #[test]
    fn test_console_reporter() {
        let log = create_logger();
        let config = SolverConfig::builder().epsilon(0.3).build().unwrap();
        let mut solver = Solver::new(&log, config);

        let mut reporter = ConsoleReporter::new(true, false, solver.config().max_iterations);
        let outcome = solver.solve_observed(&mut reporter);

        assert!(outcome.iterations() == 1);
        assert!(reporter.progress.position() == 1);
        assert!(reporter.progress.is_finished());
        assert!(outcome.report().grid != BoundaryCondition::default().initialize(4));
    }
}
