//! ring_cli - Monte Carlo boxing match prediction CLI
//!
//! Resolves two fighters through the provider chain (optional roster file
//! first, embedded table second), runs the simulation and prints the text
//! report or the raw JSON payload.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ring_core::data::{resolve_fighter, ChainedProvider, FighterProvider, StaticTableProvider};
use ring_core::{
    simulate, summarize, ExecutionMode, RawFighterRecord, ScoringWeights, SimulationPlan,
    DEFAULT_SEED, SimError,
};

#[derive(Parser)]
#[command(name = "ring_cli")]
#[command(about = "Predict a boxing match with Monte Carlo simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a matchup between two fighters
    Simulate {
        /// First fighter's name
        #[arg(default_value = "Anthony Joshua")]
        fighter1: String,

        /// Second fighter's name
        #[arg(default_value = "Jake Paul")]
        fighter2: String,

        /// Number of trials to run (capped at 200000)
        #[arg(long, default_value_t = 100_000)]
        trials: u64,

        /// Master seed for reproducible runs
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Run single-threaded (bit-exact across machines)
        #[arg(long)]
        sequential: bool,

        /// Use the record-only weight set (no weight-class term)
        #[arg(long)]
        classic_weights: bool,

        /// Extra roster JSON file, tried before the embedded table
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Print the summary as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// List all fighters the provider chain can resolve
    Roster {
        /// Extra roster JSON file, tried before the embedded table
        #[arg(long)]
        roster: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            fighter1,
            fighter2,
            trials,
            seed,
            sequential,
            classic_weights,
            roster,
            json,
        } => {
            let provider = build_provider(roster.as_deref())?;

            let fighter_a = resolve(&*provider, &fighter1)?;
            let fighter_b = resolve(&*provider, &fighter2)?;

            let mode =
                if sequential { ExecutionMode::Sequential } else { ExecutionMode::Parallel };
            let weights = if classic_weights {
                ScoringWeights::classic()
            } else {
                ScoringWeights::weight_aware()
            };
            let plan = SimulationPlan::new(fighter_a.clone(), fighter_b.clone(), trials)
                .with_seed(seed)
                .with_mode(mode)
                .with_weights(weights);

            let result = simulate(&plan).context("simulation failed")?;
            let summary = summarize(&result, &fighter_a, &fighter_b);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", summary.render_text());
            }
            Ok(())
        }

        Commands::Roster { roster } => {
            let provider = build_provider(roster.as_deref())?;
            for name in provider.known_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// Build the provider chain: user roster file (if given) first, embedded
/// curated table last.
fn build_provider(roster: Option<&std::path::Path>) -> Result<Box<dyn FighterProvider>> {
    let embedded = StaticTableProvider::embedded();
    match roster {
        None => Ok(Box::new(embedded)),
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading roster file {}", path.display()))?;
            let records: Vec<RawFighterRecord> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing roster file {}", path.display()))?;
            let custom = StaticTableProvider::new(
                records.into_iter().map(RawFighterRecord::into_profile).collect(),
            );
            Ok(Box::new(ChainedProvider::new(vec![Box::new(custom), Box::new(embedded)])))
        }
    }
}

/// Resolve a name, turning the not-found error into a friendly message with
/// the suggestion and the available roster.
fn resolve(provider: &dyn FighterProvider, name: &str) -> Result<ring_core::FighterProfile> {
    resolve_fighter(provider, name).map_err(|err| match err {
        SimError::FighterNotFound { name, suggestion, available } => {
            let mut msg = format!("fighter '{name}' not found");
            if let Some(s) = suggestion {
                msg.push_str(&format!("; did you mean '{s}'?"));
            }
            msg.push_str(&format!("\navailable fighters:\n  {}", available.join("\n  ")));
            anyhow::anyhow!(msg)
        }
        other => anyhow::Error::new(other),
    })
}
