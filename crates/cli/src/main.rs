//! Marche type runner.
//!
//! Without flags, runs the demo follower simulation and prints one
//! `distance, speed` line per step. With `--plot`, generates the demo route
//! speed profile and plots it when plot support is compiled in.
//!
//! # Example
//!
//! ```bash
//! # Follower samples for the built-in scenario
//! marche-type
//!
//! # Route profile from a scenario file, logging arrivals
//! RUST_LOG=marche_dynamics=debug marche-type --plot --scenario route.toml
//! ```

mod run;
mod scenario;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use marche_observers::render;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

/// Marche type simulations with the Intelligent Driver Model.
#[derive(Parser, Debug)]
#[command(name = "marche-type")]
#[command(version, about, long_about = None)]
struct Args {
    /// Plot a sample route with stops instead of printing follower samples
    #[arg(long)]
    plot: bool,

    /// TOML file overriding the built-in demo scenario
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Stop the simulation after this many simulated seconds
    #[arg(long, value_name = "SECONDS")]
    max_time: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,marche_cli=info,marche_dynamics=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    let mut stdout = io::stdout().lock();

    if args.plot {
        let renderer = render::detect();
        debug!(available = renderer.is_ok(), "plot capability");
        let renderer = renderer.as_deref().map_err(Clone::clone);
        run::route(&scenario, args.max_time, renderer, &mut stdout)
    } else {
        run::follower(&scenario, args.max_time, &mut stdout)
    }
}
