//! Session file handling for saving and loading wizard sessions.
//!
//! A session is a state snapshot plus an action log, both stored as JSON.
//! Action logs are arrays of `{"type": ..., "payload": ...}` envelopes.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::error::WizardError;
use crate::reducer::ReduceError;
use crate::state::WizardState;
use crate::store::Store;

/// Load a state snapshot from a JSON file
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<WizardState> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read state snapshot from {:?}", path.as_ref()))?;

    let state: WizardState =
        serde_json::from_str(&content).context("Failed to parse state snapshot JSON")?;

    Ok(state)
}

/// Save a state snapshot to a JSON file
pub fn save_state<P: AsRef<Path>>(state: &WizardState, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state snapshot")?;

    fs::write(&path, json)
        .with_context(|| format!("Failed to write state snapshot to {:?}", path.as_ref()))?;

    Ok(())
}

/// Load an action log from a JSON file
pub fn load_actions<P: AsRef<Path>>(path: P) -> Result<Vec<Action>> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read action log from {:?}", path.as_ref()))?;

    parse_actions(&content)
        .with_context(|| format!("Invalid action log {:?}", path.as_ref()))
}

/// Parse an action log from JSON text
pub fn parse_actions(content: &str) -> std::result::Result<Vec<Action>, WizardError> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(entries) = value else {
        return Err(WizardError::session("action log must be a JSON array"));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Action::from_value(entry)
                .map_err(|e| WizardError::session(format!("action #{index}: {e}")))
        })
        .collect()
}

/// Check a snapshot against the invariants the reducer maintains
pub fn validate_state(state: &WizardState) -> std::result::Result<(), WizardError> {
    for (label, folders) in [
        ("module", &state.selected_module_folders),
        ("theme", &state.selected_theme_folders),
    ] {
        let mut seen = HashSet::new();
        for folder in folders {
            if !seen.insert(folder) {
                return Err(WizardError::validation(format!(
                    "Selected {label} folder '{folder}' appears more than once"
                )));
            }
        }
    }

    let mut seen_sections = HashSet::new();
    for section in &state.selected_component_type_sections {
        if !seen_sections.insert(section) {
            return Err(WizardError::validation(format!(
                "Component type section '{section}' appears more than once"
            )));
        }
    }

    let all_downloaded = state.all_downloaded();
    if state.download_complete != all_downloaded {
        return Err(WizardError::validation(if all_downloaded {
            "Every component is resolved but the download is not marked complete"
        } else {
            "Download marked complete while components are still pending"
        }));
    }
    if state.is_downloading && all_downloaded {
        return Err(WizardError::validation(
            "Download still in progress although every component is resolved",
        ));
    }

    for (version, catalogue) in &state.compatible_components {
        for (folder, module) in &catalogue.modules {
            if &module.folder != folder {
                return Err(WizardError::validation(format!(
                    "Catalogue {version} keys module '{}' under folder '{folder}'",
                    module.folder
                )));
            }
        }
    }

    Ok(())
}

/// Result of replaying an action log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Actions accepted by the reducer
    pub applied: usize,
    /// Actions that decoded to an unknown type (applied as no-ops)
    pub unrecognized: usize,
    /// Rejected actions by position in the log
    pub rejected: Vec<(usize, ReduceError)>,
}

/// Dispatch every action of a log into `store`.
///
/// With `keep_going` rejected actions are recorded and skipped; otherwise
/// the first rejection aborts the replay.
pub fn replay_actions(
    store: &mut Store,
    actions: Vec<Action>,
    keep_going: bool,
) -> std::result::Result<ReplayReport, WizardError> {
    let mut report = ReplayReport::default();

    for (index, action) in actions.into_iter().enumerate() {
        let unrecognized = matches!(action, Action::Unrecognized { .. });
        debug!(index, action = action.name(), "replaying");

        match store.dispatch(action) {
            Ok(_) => {
                report.applied += 1;
                if unrecognized {
                    report.unrecognized += 1;
                }
            }
            Err(err) if keep_going => {
                warn!(index, error = %err, "skipping rejected action");
                report.rejected.push((index, err));
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        "replay finished"
    );
    Ok(report)
}
