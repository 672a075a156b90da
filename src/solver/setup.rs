use std::fmt::Debug;
use std::str::FromStr;

use crate::log::*;
use crate::solver::boundary::{BoundaryCondition, Edge};
use crate::solver::jacobi::{Solver, SolverConfig};
use crate::types::*;
use clap::Parser;
use nalgebra as na;

pub fn parse_vector<T, const DIM: usize>(s: &str) -> Result<na::SVector<T, DIM>, String>
where
    T: na::Scalar + FromStr,
    <T as FromStr>::Err: Debug,
{
    let ss = s.split(',').collect::<Vec<&str>>();

    if ss.len() != DIM {
        return Err(format!("Need {} comma-separated values. {:?}", DIM, ss));
    }

    let values = ss
        .iter()
        .map(|s| {
            return s
                .trim()
                .parse::<T>()
                .map_err(|_| format!("Value '{}' is not a number.", s));
        })
        .collect::<Result<Vec<T>, String>>()?;

    return Ok(na::SVector::<T, DIM>::from_iterator(values));
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CLIArgs {
    /// Interior cells per dimension.
    #[arg(short = 'n', long = "size", default_value_t = crate::solver::jacobi::DEFAULT_SIZE)]
    pub size: usize,

    /// Convergence threshold on the maximum change per iteration.
    #[arg(short = 'e', long = "epsilon", default_value_t = crate::solver::jacobi::DEFAULT_EPSILON, allow_hyphen_values = true)]
    pub epsilon: Scalar,

    #[arg(short = 'm', long = "max-iterations", default_value_t = crate::solver::jacobi::DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u64,

    #[arg(long = "edge", value_enum, default_value_t = Edge::Top)]
    pub edge: Edge,

    #[arg(short = 't', long = "temperature", default_value_t = 1.0, allow_hyphen_values = true)]
    pub temperature: Scalar,

    /// Print the grid after every iteration.
    #[arg(long = "print-grids", default_value_t = false)]
    pub print_grids: bool,

    /// Save a heat map of the final grid to this file.
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    #[arg(long = "plot-dim", default_value = "800, 800", value_parser = parse_vector::<usize, 2>)]
    pub plot_dim: Dimension2,

    #[arg(long = "show-progress", default_value_t = false)]
    pub show_progress: bool,

    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_args() -> CLIArgs {
    return CLIArgs::parse();
}

pub fn config_from_args(cli: &CLIArgs) -> SimpleResult<SolverConfig> {
    let config = SolverConfig::builder()
        .n(cli.size)
        .epsilon(cli.epsilon)
        .max_iterations(cli.max_iterations)
        .boundary(BoundaryCondition::new(cli.edge, cli.temperature))
        .build();

    return match config {
        Ok(c) => Ok(c),
        Err(e) => bail!("Invalid configuration: {}", e),
    };
}

pub fn setup_solver<'t>(log: &'t Logger, cli: &CLIArgs) -> SimpleResult<Solver<'t>> {
    let config = config_from_args(cli)?;

    if config.epsilon <= 0.0 {
        warn!(
            log,
            "Epsilon '{}' is not positive, the solver stops only at the iteration limit.",
            config.epsilon
        );
    }

    return Ok(Solver::new(log, config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_parse_vector() {
        let v = parse_vector::<usize, 2>("800, 600").unwrap();
        assert!(v == dim!(800, 600));

        assert!(parse_vector::<usize, 2>("800").is_err());
        assert!(parse_vector::<usize, 2>("a, 3").is_err());
    }

    #[test]
    fn check_defaults() {
        let cli = CLIArgs::parse_from(["rsheat"]);
        let config = config_from_args(&cli).unwrap();

        assert!(config == SolverConfig::default(), "{:?}", config);
        assert!(cli.output.is_none());
    }

    #[test]
    fn check_args() {
        let cli = CLIArgs::parse_from([
            "rsheat", "-n", "8", "-e", "-1", "-m", "20", "--edge", "left", "-t", "2.5",
        ]);
        let config = config_from_args(&cli).unwrap();

        assert!(config.n == 8);
        assert!(config.epsilon == -1.0);
        assert!(config.max_iterations == 20);
        assert!(config.boundary == BoundaryCondition::new(Edge::Left, 2.5));
    }

    #[test]
    fn check_invalid_args() {
        let cli = CLIArgs::parse_from(["rsheat", "--size", "0"]);
        assert!(config_from_args(&cli).is_err());

        let cli = CLIArgs::parse_from(["rsheat", "--max-iterations", "0"]);
        assert!(config_from_args(&cli).is_err());

        let cli = CLIArgs::parse_from(["rsheat", "--epsilon", "NaN"]);
        assert!(config_from_args(&cli).is_err());

        let cli = CLIArgs::parse_from(["rsheat", "-n", "18446744073709551615"]);
        assert!(config_from_args(&cli).is_err());
    }
}
