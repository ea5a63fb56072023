#![warn(clippy::all)]

use anyhow::{Context, Result};
use lookup_life::{read_grid, Config, DefaultEngine, Engine, Error};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run(config: &Config) -> Result<()> {
    let grid = read_grid(&config.path)
        .with_context(|| format!("cannot load universe from {}", config.path.display()))?;
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        iterations = config.iterations,
        "starting simulation"
    );

    let mut engine = DefaultEngine::from_grid(&grid);
    for i in 0..config.iterations {
        engine.advance();
        println!("\nIteration {}", i);
        print!("{}", engine.current_grid());
    }
    info!(population = engine.population(), "simulation finished");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,lookup_life=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            if matches!(e, Error::MissingPath) {
                eprintln!("{}", Config::USAGE);
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
