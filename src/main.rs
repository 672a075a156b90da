use rsheat::log::{create_logger_with_level, error, info, Level, Logger};
use rsheat::solver::observer::Stopwatch;
use rsheat::solver::setup::{parse_args, setup_solver, CLIArgs};
use rsheat::solver::visualization::{format_grid, save_plot, ConsoleReporter};
use rsheat::types::GenericResult;
use std::process::ExitCode;

fn run(log: &Logger, cli: &CLIArgs) -> GenericResult<()> {
    let mut solver = setup_solver(log, cli)?;

    let max_iterations = solver.config().max_iterations;
    let mut observers = (
        Stopwatch::new(),
        ConsoleReporter::new(cli.print_grids, cli.show_progress, max_iterations),
    );
    let outcome = solver.solve_observed(&mut observers);
    let report = outcome.report();

    let secs = observers.0.elapsed().unwrap_or_default().as_secs_f64();
    println!("{} iterations in {:.3} sec", report.iterations, secs);
    println!("Grid:\n{}", format_grid(&report.grid));

    if let Some(file) = &cli.output {
        let text = format!(
            "iterations: {}, max. delta: {:.3e}",
            report.iterations, report.max_delta
        );
        save_plot(log, &report.grid, file, cli.plot_dim, Some(&text))?;
    }

    if !outcome.is_converged() {
        return Err(format!("No convergence within {} iterations.", report.iterations).into());
    }

    return Ok(());
}

fn main() -> ExitCode {
    let cli = parse_args();

    let level = if cli.verbose { Level::Debug } else { Level::Info };
    let log = create_logger_with_level(level);
    info!(log, "Logging ready!");

    return match run(&log, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(log, "{}", e);
            ExitCode::FAILURE
        }
    };
}
