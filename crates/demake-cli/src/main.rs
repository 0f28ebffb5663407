//! CLI frontend for the Demake dice pools and character sheets.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "demake",
    about = "Demake — World of Darkness dice pools and character sheets",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool of d10s and count successes
    Roll {
        /// Number of dice in the pool
        #[arg(allow_negative_numbers = true)]
        size: i64,

        /// Faces at or above this value succeed
        #[arg(short, long, default_value = "6", allow_negative_numbers = true)]
        difficulty: i32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a check for an actor from a pool formula or an item
    Check {
        /// Actor snapshot (JSON)
        actor: PathBuf,

        /// Pool formula, e.g. "@dex + @athletics"
        #[arg(required_unless_present = "item", conflicts_with = "item")]
        formula: Option<String>,

        /// Roll an embedded item's formula instead
        #[arg(short, long)]
        item: Option<String>,

        /// What is being rolled
        #[arg(short, long)]
        label: Option<String>,

        /// Difficulty (default: 6)
        #[arg(short, long, allow_negative_numbers = true)]
        difficulty: Option<i32>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an actor's character sheet
    Sheet {
        /// Actor snapshot (JSON)
        actor: PathBuf,

        /// Print the sheet context as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the system's abilities
    Abilities,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            size,
            difficulty,
            seed,
            json,
        } => commands::roll::run(size, difficulty, seed, json),
        Commands::Check {
            actor,
            formula,
            item,
            label,
            difficulty,
            seed,
            json,
        } => commands::check::run(
            &actor,
            commands::check::CheckArgs {
                formula,
                item,
                label,
                difficulty,
                seed,
                json,
            },
        ),
        Commands::Sheet { actor, json } => commands::sheet::run(&actor, json),
        Commands::Abilities => commands::abilities::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send logs to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
