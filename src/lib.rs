//! Component Wizard Library
//!
//! State layer for a wizard that selects, downloads and installs the core,
//! API, module and theme components of a host application.

pub mod action;
pub mod catalogue;
pub mod cli;
pub mod error;
pub mod reducer;
pub mod selectors;
pub mod session_file;
pub mod state;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use action::{Action, ActionKind};
pub use catalogue::{ApiDescriptor, ComponentDescriptor, RawApiRelease, RawComponent, RawVersion, VersionCatalogue};
pub use error::WizardError;
pub use reducer::{ReduceError, reduce, toggle_membership};
pub use state::WizardState;
pub use store::{Store, SubscriptionId};
pub use types::{
    ComponentChangelog, ComponentType, DownloadStatus, InfoModal, InstalledComponents,
    SelectionSnapshot, component_identifier,
};
