//! Action vocabulary for the wizard reducer
//!
//! Every event the UI, the catalogue loader, the changelog loader or the
//! download subsystem can report is one variant of [`Action`]. On the wire an
//! action is `{"type": "TOGGLE_MODULE", "payload": {"folder": "..."}}`, with
//! camelCase payload fields. Unit actions may omit the payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use strum::{Display, EnumDiscriminants, EnumIter, EnumString, IntoStaticStr};

use crate::catalogue::{RawApiRelease, RawComponent};
use crate::error::{Result, WizardError};
use crate::types::{ComponentType, DownloadStatus, InstalledComponents};

/// An event dispatched into the wizard reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[derive(EnumDiscriminants)]
#[serde(tag = "type", content = "payload")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
#[strum_discriminants(name(ActionKind))]
#[strum_discriminants(derive(Hash, Display, EnumString, EnumIter, IntoStaticStr))]
#[strum_discriminants(strum(serialize_all = "SCREAMING_SNAKE_CASE"))]
pub enum Action {
    /// The compatibility catalogue for `core_version` arrived
    CompatibleComponentsLoaded {
        core_version: String,
        #[serde(default)]
        modules: Vec<RawComponent>,
        #[serde(default)]
        themes: Vec<RawComponent>,
        #[serde(default)]
        api: Vec<RawApiRelease>,
    },
    InitSelectedComponents {
        core_selected: bool,
        api_selected: bool,
        #[serde(default)]
        selected_module_folders: Vec<String>,
        #[serde(default)]
        selected_theme_folders: Vec<String>,
    },
    SetCoreVersion {
        core_version: Option<String>,
    },
    /// What is installed on the host, as one batch
    InstalledComponentsLoaded {
        components: InstalledComponents,
    },
    ToggleApi,
    ToggleModule {
        folder: String,
    },
    ToggleTheme {
        folder: String,
    },
    /// Requires the catalogue for the current core version to be loaded
    SelectAllModules,
    DeselectAllModules,
    EditSelectedComponentList,
    CancelEditSelectedComponentList,
    /// Begins a download batch. Entries are keyed by
    /// [`component_identifier`](crate::types::component_identifier).
    StartDownloadCompatibleComponents {
        component_list: BTreeMap<String, DownloadStatus>,
    },
    /// One component of the current batch finished downloading/unpacking
    ComponentDownloadUnpackResponse {
        folder: String,
        #[serde(rename = "type")]
        component_type: ComponentType,
        success: bool,
        #[serde(default)]
        log: Vec<String>,
    },
    SaveSelectedComponentList,
    /// Exclusive choice: replaces the section list with `[section]`
    SelectComponentTypeSection {
        section: ComponentType,
    },
    SelectComponentTypeSections {
        sections: Vec<ComponentType>,
    },
    ToggleComponentTypeSection {
        section: ComponentType,
    },
    ShowComponentChangelogModal {
        component_type: ComponentType,
        folder: String,
    },
    CloseComponentChangelogModal,
    ComponentHistoryLoaded {
        folder: String,
        load_success: bool,
        #[serde(default)]
        versions: Vec<Value>,
        #[serde(default)]
        desc: String,
    },
    ToggleShowDetailedDownloadLog,
    /// Any event type this reducer does not know. Reduces to a no-op.
    #[serde(skip)]
    Unrecognized { kind: String },
}

impl Action {
    /// Discriminant of this action
    pub fn kind(&self) -> ActionKind {
        ActionKind::from(self)
    }

    /// Wire name of this action (`TOGGLE_MODULE`, ...)
    pub fn name(&self) -> &str {
        match self {
            Self::Unrecognized { kind } => kind.as_str(),
            _ => self.kind().into(),
        }
    }

    /// Decode one action from its JSON envelope.
    ///
    /// Unknown `type` values decode to [`Action::Unrecognized`]; a known type
    /// with a malformed payload is an error.
    pub fn from_value(value: Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| WizardError::session("action is missing a string 'type' field"))?;

        match kind.parse::<ActionKind>() {
            Ok(ActionKind::Unrecognized) | Err(_) => Ok(Self::Unrecognized { kind }),
            Ok(_) => Ok(serde_json::from_value(value)?),
        }
    }
}
