//! fairshare-cli: run equal-share budget decompositions from the command line.
//!
//! Solves a JSON scenario file or the built-in demo scenario and prints each
//! citizen's allocation, or the outcome as JSON.

mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fairshare_core::traits::DecompositionStrategy;
use fairshare_core::types::Outcome;
use fairshare_decompose::{Decomposer, DecomposerConfig};
use tracing::info;

use crate::scenario::Scenario;

/// Equal-share budget decomposition over citizen preferences.
#[derive(Parser)]
#[command(name = "fairshare-cli")]
#[command(version, about = "Split a budget so every citizen funds only what they endorse.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a scenario file.
    Solve(SolveArgs),
    /// Solve the built-in five-citizen example.
    Demo(OutputArgs),
}

#[derive(Args)]
struct GlobalArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Absolute tolerance for share comparisons
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Always run the greedy path, even for one-to-one claims
    #[arg(long, global = true)]
    no_fast_path: bool,
}

#[derive(Args)]
struct SolveArgs {
    /// Path to a JSON scenario: {"budget": [...], "preferences": [[...], ...]}
    file: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the outcome as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl GlobalArgs {
    /// Overlay command-line flags on the scenario's stored settings.
    fn config(&self, stored: Option<DecomposerConfig>) -> DecomposerConfig {
        let mut config = stored.unwrap_or_default();
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if self.no_fast_path {
            config.basic_fast_path = false;
        }
        config
    }
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// `RUST_LOG` takes precedence over `level_str` when set.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .init();
    }
}

fn run(scenario: Scenario, global: &GlobalArgs, output: &OutputArgs) -> Result<()> {
    let config = global.config(scenario.config);
    let engine = Decomposer::with_config(config).context("invalid decomposer settings")?;

    info!(
        citizens = scenario.preferences.citizens(),
        subjects = scenario.budget.len(),
        total = scenario.budget.total(),
        tolerance = engine.config().tolerance,
        fast_path = engine.config().basic_fast_path,
        "solving scenario"
    );

    let outcome = engine
        .decompose(&scenario.budget, &scenario.preferences)
        .context("invalid scenario")?;

    match &outcome {
        Outcome::Decomposed { path, .. } => info!(?path, "decomposition found"),
        Outcome::Infeasible { reason } => info!(%reason, "no decomposition"),
    }

    if output.json {
        println!("{}", report::render_json(&outcome)?);
    } else {
        print!("{}", report::render_text(&outcome));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global.log_level, &cli.global.log_format);

    match cli.command {
        Commands::Solve(args) => {
            let scenario = Scenario::load(&args.file)?;
            run(scenario, &cli.global, &args.output)
        }
        Commands::Demo(output) => run(Scenario::demo(), &cli.global, &output),
    }
}
