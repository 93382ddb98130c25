use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Component Wizard - replay and inspect wizard state sessions
#[derive(Parser)]
#[command(name = "component-wizard")]
#[command(about = "Replay component wizard action logs and inspect state snapshots")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply an action log to a state and print the result
    Replay {
        /// JSON array of actions to dispatch
        actions: PathBuf,

        /// State snapshot to start from (defaults to a fresh wizard)
        #[arg(short, long)]
        initial_state: Option<PathBuf>,

        /// Write the final state here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip rejected actions instead of stopping at the first one
        #[arg(long)]
        keep_going: bool,
    },
    /// Check that an action log decodes
    Validate {
        /// JSON array of actions to check
        actions: PathBuf,
    },
    /// Print the initial wizard state
    Init {
        /// Write the state here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize the download batch of a state snapshot
    Summary {
        /// State snapshot to inspect
        state: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
