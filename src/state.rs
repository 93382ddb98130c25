//! Wizard state definitions
//!
//! `WizardState` is the whole client-side state of the component wizard. It
//! is created once with defaults when the wizard starts and replaced by a new
//! value on every transition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalogue::VersionCatalogue;
use crate::types::{
    ComponentChangelog, ComponentType, DownloadStatus, InfoModal, InstalledComponents,
    InstalledRecord, SelectionSnapshot,
};

/// Main wizard state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardState {
    // Load flags
    pub compatible_components_loaded: bool,
    pub installed_components_loaded: bool,
    pub error_loading: bool,
    pub error: String,

    // Editing
    pub is_editing: bool,
    pub show_info_modal: bool,
    /// Component shown in the info modal; stale once the modal closes
    pub info_modal: Option<InfoModal>,

    // Version selection
    pub core_version: Option<String>,
    pub core_desc: String,

    /// Release history per folder, populated on demand
    pub changelogs: BTreeMap<String, ComponentChangelog>,

    /// Compatibility catalogues keyed by core version. Entries are only ever
    /// added or replaced, never removed.
    pub compatible_components: BTreeMap<String, VersionCatalogue>,

    // Installed on the host
    pub installed_core: InstalledRecord,
    #[serde(rename = "installedAPI")]
    pub installed_api: InstalledRecord,
    pub installed_modules: InstalledRecord,
    pub installed_themes: InstalledRecord,

    // User selection
    pub selected_component_type_sections: Vec<ComponentType>,
    pub selected_module_folders: Vec<String>,
    pub selected_theme_folders: Vec<String>,
    pub api_selected: bool,
    pub core_selected: bool,

    // Download progress
    pub is_downloading: bool,
    pub download_complete: bool,
    pub show_detailed_download_log: bool,
    /// Current download batch keyed by component identifier
    pub downloaded_components: BTreeMap<String, DownloadStatus>,

    /// Selection stashed by the last edit session. Only meaningful while
    /// `is_editing` is true.
    pub last_saved_components: Option<SelectionSnapshot>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue for a given core version, if loaded
    pub fn catalogue(&self, core_version: &str) -> Option<&VersionCatalogue> {
        self.compatible_components.get(core_version)
    }

    /// True when every entry of the current batch has an outcome
    pub fn all_downloaded(&self) -> bool {
        self.downloaded_components.values().all(DownloadStatus::is_resolved)
    }

    /// Current selection as a snapshot
    pub fn selection(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selected_module_folders: self.selected_module_folders.clone(),
            selected_theme_folders: self.selected_theme_folders.clone(),
            api_selected: self.api_selected,
        }
    }

    pub fn installed(&self) -> InstalledComponents {
        InstalledComponents {
            core: self.installed_core.clone(),
            api: self.installed_api.clone(),
            modules: self.installed_modules.clone(),
            themes: self.installed_themes.clone(),
        }
    }
}
