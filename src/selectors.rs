//! Derived views over `WizardState`
//!
//! Read-only helpers for the rendering layer and the download collaborator.
//! Nothing here changes state.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalogue::VersionCatalogue;
use crate::state::WizardState;
use crate::types::{ComponentChangelog, ComponentType, DownloadStatus, component_identifier};

/// Catalogue for the currently selected core version
pub fn current_catalogue(state: &WizardState) -> Option<&VersionCatalogue> {
    state
        .core_version
        .as_deref()
        .and_then(|version| state.catalogue(version))
}

/// Cached history for `folder`, if the changelog source has answered
pub fn changelog_for<'a>(state: &'a WizardState, folder: &str) -> Option<&'a ComponentChangelog> {
    state.changelogs.get(folder)
}

/// Tally of the current download batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DownloadSummary {
    pub total: usize,
    pub pending: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl DownloadSummary {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.pending == 0
    }

    /// True if any resolved entry failed
    #[inline]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

pub fn download_summary(state: &WizardState) -> DownloadSummary {
    state
        .downloaded_components
        .values()
        .fold(DownloadSummary::default(), |mut summary, status| {
            summary.total += 1;
            match status.download_success {
                None => summary.pending += 1,
                Some(true) => summary.succeeded += 1,
                Some(false) => summary.failed += 1,
            }
            summary
        })
}

/// Initial component list for a download batch, built from the selection.
///
/// Core is included when `core_selected`, the API when `api_selected`, plus
/// every selected module and theme. Each entry starts pending.
pub fn download_plan(state: &WizardState) -> BTreeMap<String, DownloadStatus> {
    let mut plan = BTreeMap::new();

    if state.core_selected {
        plan.insert(component_identifier("core", ComponentType::Core), DownloadStatus::pending());
    }
    if state.api_selected {
        plan.insert(component_identifier("api", ComponentType::Api), DownloadStatus::pending());
    }
    for folder in &state.selected_module_folders {
        plan.insert(component_identifier(folder, ComponentType::Module), DownloadStatus::pending());
    }
    for folder in &state.selected_theme_folders {
        plan.insert(component_identifier(folder, ComponentType::Theme), DownloadStatus::pending());
    }

    plan
}

/// Entries of the current batch that failed, with their logs
pub fn failed_downloads(state: &WizardState) -> Vec<(&str, &[String])> {
    state
        .downloaded_components
        .iter()
        .filter(|(_, status)| status.download_success == Some(false))
        .map(|(id, status)| (id.as_str(), status.log.as_slice()))
        .collect()
}
