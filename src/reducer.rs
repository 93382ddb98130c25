//! Wizard reducer
//!
//! Pure transition logic: `(state, action) -> next state`. No I/O, no clocks,
//! no shared mutable state. The input state is borrowed and never modified,
//! so snapshots handed out earlier stay valid.
//!
//! # Transitions
//!
//! | Action | Effect |
//! |--------|--------|
//! | `CompatibleComponentsLoaded` | Merge catalogue under its core version, set loaded flag |
//! | `InitSelectedComponents` | Overwrite core/api flags and folder selections |
//! | `SetCoreVersion` | Overwrite `core_version` |
//! | `InstalledComponentsLoaded` | Overwrite installed records, set loaded flag |
//! | `ToggleApi` / `ToggleModule` / `ToggleTheme` | Flip flag or folder membership |
//! | `SelectAllModules` / `DeselectAllModules` | All catalogue modules / none |
//! | `Edit...` / `Cancel...` / `SaveSelectedComponentList` | Edit session with snapshot restore |
//! | `StartDownloadCompatibleComponents` | Replace the download batch, recompute completion |
//! | `ComponentDownloadUnpackResponse` | Resolve one entry, recompute completion |
//! | `Select...Section(s)` / `ToggleComponentTypeSection` | Section selection |
//! | `Show...` / `CloseComponentChangelogModal` | Info modal |
//! | `ComponentHistoryLoaded` | Cache changelog, core description |
//! | `ToggleShowDetailedDownloadLog` | Flip flag |
//! | `Unrecognized` | No change |

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::catalogue::VersionCatalogue;
use crate::state::WizardState;
use crate::types::{ComponentChangelog, InfoModal, component_identifier};

/// Changelog folder whose description also becomes `core_desc`
const CORE_FOLDER: &str = "core";

/// Transitions the reducer refuses to perform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// `SelectAllModules` before the catalogue for the core version loaded
    #[error("No compatibility catalogue loaded for core version {}", core_version.as_deref().unwrap_or("<unset>"))]
    CatalogueNotLoaded { core_version: Option<String> },

    /// A download result for a component that is not part of the current batch
    #[error("Component '{id}' is not part of the current download batch")]
    UnknownDownload { id: String },
}

/// Compute the state that follows `state` after `action`.
///
/// # Errors
///
/// - `CatalogueNotLoaded` for `SelectAllModules` when no catalogue exists for
///   the current core version
/// - `UnknownDownload` for a download result whose identifier was never
///   started
///
/// On error the caller keeps `state`; nothing partial is produced.
pub fn reduce(state: &WizardState, action: &Action) -> Result<WizardState, ReduceError> {
    trace!(action = action.name(), "reducing");
    let mut next = state.clone();

    match action {
        Action::CompatibleComponentsLoaded {
            core_version,
            modules,
            themes,
            api,
        } => {
            let catalogue = VersionCatalogue::from_raw(modules, themes, api);
            debug!(
                core_version = %core_version,
                modules = catalogue.modules.len(),
                themes = catalogue.themes.len(),
                "compatibility catalogue loaded"
            );
            next.compatible_components_loaded = true;
            next.compatible_components.insert(core_version.clone(), catalogue);
        }

        Action::InitSelectedComponents {
            core_selected,
            api_selected,
            selected_module_folders,
            selected_theme_folders,
        } => {
            next.core_selected = *core_selected;
            next.api_selected = *api_selected;
            next.selected_module_folders = dedup_preserving_order(selected_module_folders);
            next.selected_theme_folders = dedup_preserving_order(selected_theme_folders);
        }

        Action::SetCoreVersion { core_version } => {
            next.core_version = core_version.clone();
        }

        Action::InstalledComponentsLoaded { components } => {
            next.installed_components_loaded = true;
            next.installed_core = components.core.clone();
            next.installed_api = components.api.clone();
            next.installed_modules = components.modules.clone();
            next.installed_themes = components.themes.clone();
        }

        Action::ToggleApi => {
            next.api_selected = !state.api_selected;
        }

        Action::ToggleModule { folder } => {
            next.selected_module_folders = toggle_membership(&state.selected_module_folders, folder);
        }

        Action::ToggleTheme { folder } => {
            next.selected_theme_folders = toggle_membership(&state.selected_theme_folders, folder);
        }

        Action::SelectAllModules => {
            let catalogue = state
                .core_version
                .as_deref()
                .and_then(|version| state.catalogue(version));
            let Some(catalogue) = catalogue else {
                warn!(core_version = ?state.core_version, "select-all before catalogue loaded");
                return Err(ReduceError::CatalogueNotLoaded {
                    core_version: state.core_version.clone(),
                });
            };
            next.selected_module_folders = catalogue.module_folders();
        }

        Action::DeselectAllModules => {
            next.selected_module_folders.clear();
        }

        Action::EditSelectedComponentList => {
            next.is_editing = true;
            next.last_saved_components = Some(state.selection());
        }

        Action::CancelEditSelectedComponentList => {
            next.is_editing = false;
            if let Some(saved) = &state.last_saved_components {
                next.selected_module_folders = saved.selected_module_folders.clone();
                next.selected_theme_folders = saved.selected_theme_folders.clone();
                next.api_selected = saved.api_selected;
            }
        }

        Action::StartDownloadCompatibleComponents { component_list } => {
            debug!(components = component_list.len(), "download batch started");
            next.downloaded_components = component_list.clone();

            let all_downloaded = next.all_downloaded();
            next.is_downloading = !all_downloaded;
            next.download_complete = all_downloaded;
        }

        Action::ComponentDownloadUnpackResponse {
            folder,
            component_type,
            success,
            log,
        } => {
            let id = component_identifier(folder, *component_type);
            let Some(entry) = next.downloaded_components.get_mut(&id) else {
                warn!(%id, "download result for unknown component");
                return Err(ReduceError::UnknownDownload { id });
            };
            entry.download_success = Some(*success);
            entry.log = log.clone();

            let all_downloaded = next.all_downloaded();
            next.is_downloading = !all_downloaded;
            next.download_complete = all_downloaded;
            debug!(%id, success, all_downloaded, "component download resolved");
        }

        Action::SaveSelectedComponentList => {
            next.is_editing = false;
        }

        Action::SelectComponentTypeSection { section } => {
            next.selected_component_type_sections = vec![*section];
        }

        Action::SelectComponentTypeSections { sections } => {
            next.selected_component_type_sections = dedup_preserving_order(sections);
        }

        Action::ToggleComponentTypeSection { section } => {
            next.selected_component_type_sections =
                toggle_membership(&state.selected_component_type_sections, section);
        }

        Action::ShowComponentChangelogModal {
            component_type,
            folder,
        } => {
            next.show_info_modal = true;
            next.info_modal = Some(InfoModal {
                component_type: *component_type,
                folder: folder.clone(),
            });
        }

        Action::CloseComponentChangelogModal => {
            next.show_info_modal = false;
        }

        Action::ComponentHistoryLoaded {
            folder,
            load_success,
            versions,
            desc,
        } => {
            next.changelogs.insert(
                folder.clone(),
                ComponentChangelog {
                    load_success: *load_success,
                    versions: versions.clone(),
                },
            );
            if folder.as_str() == CORE_FOLDER {
                next.core_desc = desc.clone();
            }
        }

        Action::ToggleShowDetailedDownloadLog => {
            next.show_detailed_download_log = !state.show_detailed_download_log;
        }

        Action::Unrecognized { kind } => {
            trace!(%kind, "ignoring unrecognized action");
        }
    }

    Ok(next)
}

/// Remove `item` if present, otherwise append it.
///
/// The remaining elements keep their order, and no duplicate is ever added.
pub fn toggle_membership<T: PartialEq + Clone>(items: &[T], item: &T) -> Vec<T> {
    if items.contains(item) {
        items.iter().filter(|existing| *existing != item).cloned().collect()
    } else {
        let mut toggled = items.to_vec();
        toggled.push(item.clone());
        toggled
    }
}

fn dedup_preserving_order<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}
