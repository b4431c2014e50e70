//! Command-line player for the Undercroft engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "undercroft",
    about = "Undercroft: a text adventure in the Great Underground Empire",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading commands from stdin
    Play {
        /// RNG seed for deterministic play
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Directory for save slots (save/restore are disabled without it)
        #[arg(long)]
        save_dir: Option<PathBuf>,

        /// Play a catalog file instead of the built-in world
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Switch off the grue, the thief and hostile actors
        #[arg(long)]
        peaceful: bool,
    },

    /// Load and validate a world catalog
    Check {
        /// Catalog file to check (default: the built-in world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            save_dir,
            world,
            peaceful,
        } => commands::play::run(world.as_deref(), seed, save_dir, peaceful),
        Commands::Check { world } => commands::check::run(world.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
