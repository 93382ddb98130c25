//! Compatibility catalogue records
//!
//! The catalogue source delivers flat lists of modules, themes and API
//! releases for one core version. These are normalized into
//! [`VersionCatalogue`], keyed by folder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::ComponentType;

/// Version block attached to a raw module/theme entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVersion {
    pub version: String,
}

/// Module or theme entry as delivered by the catalogue source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComponent {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub folder: String,
    #[serde(default)]
    pub repo: String,
    pub version: RawVersion,
}

/// API release entry as delivered by the catalogue source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawApiRelease {
    #[serde(default)]
    pub desc: String,
    pub version: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Normalized module or theme description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub desc: String,
    pub folder: String,
    pub repo: String,
    pub version: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
}

impl ComponentDescriptor {
    fn from_raw(raw: &RawComponent, component_type: ComponentType) -> Self {
        Self {
            name: raw.name.clone(),
            desc: raw.desc.clone(),
            folder: raw.folder.clone(),
            repo: raw.repo.clone(),
            version: raw.version.version.clone(),
            component_type,
        }
    }
}

/// Normalized API description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDescriptor {
    pub name: String,
    pub folder: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub desc: String,
    pub version: String,
    pub release_date: Option<String>,
}

impl From<&RawApiRelease> for ApiDescriptor {
    fn from(release: &RawApiRelease) -> Self {
        Self {
            name: "API".to_string(),
            folder: "api".to_string(),
            component_type: ComponentType::Api,
            desc: release.desc.clone(),
            version: release.version.clone(),
            release_date: release.release_date.clone(),
        }
    }
}

/// Components compatible with one core version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCatalogue {
    pub modules: BTreeMap<String, ComponentDescriptor>,
    pub themes: BTreeMap<String, ComponentDescriptor>,
    pub api: Option<ApiDescriptor>,
}

impl VersionCatalogue {
    /// Build a catalogue from raw source lists.
    ///
    /// Later entries with a repeated folder replace earlier ones. Only the
    /// first API release is consulted.
    pub fn from_raw(modules: &[RawComponent], themes: &[RawComponent], api: &[RawApiRelease]) -> Self {
        let modules = modules
            .iter()
            .map(|m| (m.folder.clone(), ComponentDescriptor::from_raw(m, ComponentType::Module)))
            .collect();
        let themes = themes
            .iter()
            .map(|t| (t.folder.clone(), ComponentDescriptor::from_raw(t, ComponentType::Theme)))
            .collect();

        Self {
            modules,
            themes,
            api: api.first().map(ApiDescriptor::from),
        }
    }

    /// Folder names of every compatible module, in folder order
    pub fn module_folders(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }
}
