//! Shared value types for the component wizard
//!
//! Component kinds, the identifier scheme used to track downloads, and the
//! small records stored inside `WizardState`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

/// Kind of installable component. Also used as a component-type section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ComponentType {
    Core,
    Api,
    Module,
    Theme,
}

/// Derive the identifier a component is tracked under in a download batch.
///
/// Core and API are singletons and ignore `folder`. Modules and themes are
/// prefixed with their kind so a module and a theme may share a folder name.
/// The download collaborator must key its initial component list with this
/// same function.
pub fn component_identifier(folder: &str, component_type: ComponentType) -> String {
    match component_type {
        ComponentType::Core => "core".to_string(),
        ComponentType::Api => "api".to_string(),
        ComponentType::Module | ComponentType::Theme => format!("{component_type}_{folder}"),
    }
}

/// Per-component result of a download/unpack batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadStatus {
    /// `None` while pending, then the outcome
    pub download_success: Option<bool>,
    #[serde(default)]
    pub log: Vec<String>,
}

impl DownloadStatus {
    /// A fresh pending entry
    pub fn pending() -> Self {
        Self::default()
    }

    /// True once the download reported an outcome, success or failure
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.download_success.is_some()
    }
}

/// Which component's details are shown in the info/changelog modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoModal {
    pub component_type: ComponentType,
    pub folder: String,
}

/// Selection stashed when an edit session begins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub selected_module_folders: Vec<String>,
    pub selected_theme_folders: Vec<String>,
    pub api_selected: bool,
}

/// Cached release history for one component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentChangelog {
    pub load_success: bool,
    /// Version records as delivered by the changelog source
    #[serde(default)]
    pub versions: Vec<Value>,
}

/// Opaque record describing something installed on the host
pub type InstalledRecord = serde_json::Map<String, Value>;

/// Everything currently installed on the host, delivered as one batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstalledComponents {
    #[serde(default)]
    pub core: InstalledRecord,
    #[serde(default)]
    pub api: InstalledRecord,
    #[serde(default)]
    pub modules: InstalledRecord,
    #[serde(default)]
    pub themes: InstalledRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_component_type_display_and_parse() {
        assert_eq!(ComponentType::Module.to_string(), "module");
        assert_eq!("theme".parse::<ComponentType>().unwrap(), ComponentType::Theme);
        assert!("plugin".parse::<ComponentType>().is_err());
    }

    #[test]
    fn test_component_type_serde_is_lowercase() {
        let json = serde_json::to_string(&ComponentType::Api).unwrap();
        assert_eq!(json, "\"api\"");
        let parsed: ComponentType = serde_json::from_str("\"core\"").unwrap();
        assert_eq!(parsed, ComponentType::Core);
    }

    #[test]
    fn test_identifier_for_singletons_ignores_folder() {
        assert_eq!(component_identifier("whatever", ComponentType::Core), "core");
        assert_eq!(component_identifier("api", ComponentType::Api), "api");
    }

    #[test]
    fn test_identifier_prefixes_modules_and_themes() {
        assert_eq!(component_identifier("mod1", ComponentType::Module), "module_mod1");
        assert_eq!(component_identifier("default", ComponentType::Theme), "theme_default");
    }

    #[test]
    fn test_identifiers_are_distinct_across_kinds() {
        let ids: Vec<String> = ComponentType::iter()
            .map(|t| component_identifier("shared", t))
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn test_download_status_pending_is_unresolved() {
        let status = DownloadStatus::pending();
        assert!(!status.is_resolved());
        assert!(status.log.is_empty());

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["downloadSuccess"], Value::Null);
    }

    #[test]
    fn test_installed_components_tolerate_empty_objects() {
        let parsed: InstalledComponents =
            serde_json::from_str(r#"{"core":{},"api":{},"modules":{},"themes":{}}"#).unwrap();
        assert_eq!(parsed, InstalledComponents::default());
    }
}
