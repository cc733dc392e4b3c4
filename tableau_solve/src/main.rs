use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use itertools::Itertools;
use tableau_solve::tableau_runs::equation_parser::parse_equations;
use tableau_solve::tableau_runs::run_builder::TableauRunBuilder;
use tableau_solve::tableau_runs::run_params::{RunParams, SystemSource};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// An equation such as "2 1 = 5"; repeat once per row. A random system is
    /// solved when none are given.
    #[arg(short, long = "equation", allow_hyphen_values = true)]
    pub equations: Vec<String>,

    #[arg(short, long, default_value_t = 3)]
    pub dimension: usize,

    #[arg(short, long, default_value_t = 1)]
    pub rhs_columns: usize,

    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = 0.0)]
    pub zero_tolerance: f64,

    /// Print the tableau before and after elimination.
    #[arg(long)]
    pub dump: bool,
}

fn run_tableau_solve(args: Args) -> Result<()> {
    let source = if args.equations.is_empty() {
        SystemSource::Random {
            dimension: args.dimension,
            rhs_columns: args.rhs_columns,
            seed: args.seed,
        }
    } else {
        SystemSource::Equations(parse_equations(args.equations.as_slice()).context("reading equations")?)
    };
    let mut params = RunParams::new(source);
    params.zero_tolerance = args.zero_tolerance;
    params.dump = args.dump;

    let report = TableauRunBuilder::new(params).run()?;
    for row in report.solution.iter() {
        println!("{}", row.iter().join(" "));
    }
    log::info!("max substitution residual: {:e}", report.residual);
    if let Some(error) = report.known_solution_error {
        log::info!("max error against the generating solution: {:e}", error);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_tableau_solve(args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}
