//! Component Wizard - Main entry point
//!
//! Replays action logs through the wizard reducer and inspects state
//! snapshots.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use component_wizard::cli::{Cli, Commands};
use component_wizard::selectors::{download_summary, failed_downloads};
use component_wizard::session_file::{
    load_actions, load_state, replay_actions, save_state, validate_state,
};
use component_wizard::{Store, WizardState};

/// Initialize the tracing subscriber; RUST_LOG overrides the default level
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Replay {
            actions,
            initial_state,
            output,
            keep_going,
        } => {
            let initial = match initial_state {
                Some(path) => {
                    info!("Loading initial state from {:?}", path);
                    let state = load_state(&path)?;
                    validate_state(&state)
                        .with_context(|| format!("Initial state {:?} is inconsistent", path))?;
                    state
                }
                None => WizardState::default(),
            };

            let actions = load_actions(&actions)?;
            info!("Replaying {} actions", actions.len());

            let mut store = Store::with_state(initial);
            let report = replay_actions(&mut store, actions, keep_going)?;
            for (index, err) in &report.rejected {
                eprintln!("! action #{index} rejected: {err}");
            }

            write_state(&store.state(), output.as_deref())?;
        }
        Commands::Validate { actions } => {
            let actions = load_actions(&actions)?;
            let unrecognized: Vec<&str> = actions
                .iter()
                .filter(|a| matches!(a, component_wizard::Action::Unrecognized { .. }))
                .map(|a| a.name())
                .collect();

            println!("✓ {} actions decoded", actions.len());
            if !unrecognized.is_empty() {
                println!("  {} unrecognized: {}", unrecognized.len(), unrecognized.join(", "));
            }
        }
        Commands::Init { output } => {
            write_state(&WizardState::default(), output.as_deref())?;
        }
        Commands::Summary { state } => {
            let state = load_state(&state)?;
            let summary = download_summary(&state);
            println!(
                "{} components: {} succeeded, {} failed, {} pending",
                summary.total, summary.succeeded, summary.failed, summary.pending
            );
            for (id, log) in failed_downloads(&state) {
                println!("✗ {id}");
                for line in log {
                    println!("    {line}");
                }
            }
        }
    }

    Ok(())
}

fn write_state(state: &WizardState, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            save_state(state, path)?;
            info!("State written to {:?}", path);
        }
        None => {
            let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
            println!("{json}");
        }
    }
    Ok(())
}
