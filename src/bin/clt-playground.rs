//! Command-line playground for the Central Limit Theorem demo.
//!
//! Run with: cargo run --bin clt-playground -- --sample-size=30 --seed=7
//!
//! Flags:
//!   --view=<playground|code|theory>
//!   --num-simulations=N   (snapped to 1000..=10000, step 100)
//!   --sample-size=N       (snapped to 5..=100, step 5)
//!   --seed=N
//!   --bins=N
//!   --config=PATH         TOML file with the same keys as SimulationConfig
//!   --json                print the simulation result as JSON

use std::{env, path::PathBuf};

use anyhow::{bail, Context as _, Result};
use tracing::info;
use u_clt::{
    config::SimulationConfig,
    telemetry::init_tracing,
    views::{self, View},
    SimulationRunner,
};

#[derive(Debug, Default)]
struct Args {
    view: View,
    config_path: Option<PathBuf>,
    num_simulations: Option<usize>,
    sample_size: Option<usize>,
    seed: Option<u64>,
    bins: Option<usize>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--view=") {
            args.view = value.parse()?;
        } else if let Some(value) = arg.strip_prefix("--config=") {
            args.config_path = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--num-simulations=") {
            args.num_simulations = Some(
                value
                    .parse()
                    .context("invalid value for --num-simulations (expected integer)")?,
            );
        } else if let Some(value) = arg.strip_prefix("--sample-size=") {
            args.sample_size = Some(
                value
                    .parse()
                    .context("invalid value for --sample-size (expected integer)")?,
            );
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            args.seed = Some(value.parse().context("invalid value for --seed (expected u64)")?);
        } else if let Some(value) = arg.strip_prefix("--bins=") {
            args.bins = Some(value.parse().context("invalid value for --bins (expected integer)")?);
        } else if arg == "--json" {
            args.json = true;
        } else {
            bail!("unrecognised argument {arg:?}");
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    config.apply_env_overrides()?;

    if let Some(n) = args.num_simulations {
        config.num_simulations = n;
    }
    if let Some(n) = args.sample_size {
        config.sample_size = n;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(n) = args.bins {
        config.histogram_bins = n;
    }

    // The sliders only offer valid counts; mirror that before calling the core.
    let config = config.clamped_to_controls();
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();

    let args = parse_args()?;

    match args.view {
        View::SourceCode => print!("== {} ==\n\n{}", args.view.label(), views::source_code()),
        View::Theory => print!("== {} ==\n\n{}", args.view.label(), views::theory()),
        View::Playground => {
            let config = load_config(&args).context("failed to load simulation config")?;
            info!(
                num_simulations = config.num_simulations,
                sample_size = config.sample_size,
                seed = ?config.seed,
                "running playground simulation"
            );

            let mut runner = SimulationRunner::from_config(&config);
            let result = runner.run_config(&config)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", views::render_playground(&result, config.histogram_bins)?);
            }
        }
    }
    Ok(())
}
