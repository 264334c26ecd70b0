//! Listing results handed to the presentation layer.

use serde::Serialize;

use crate::domain::{ComponentId, ComponentStatus, ComponentVersion, StatusEntry};

/// Resolved catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentListing {
    pub entries: Vec<StatusEntry>,
    /// Whether installed/latest versions should be rendered.
    pub show_versions: bool,
}

impl ComponentListing {
    pub fn count(&self, status: ComponentStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    pub fn has_updates(&self) -> bool {
        self.count(ComponentStatus::UpdateAvailable) > 0
    }
}

/// An installed component listed without consulting the remote catalog.
///
/// Catalog fields are filled from the last cached snapshot when available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalComponentEntry {
    pub id: ComponentId,
    pub installed_version: ComponentVersion,
    pub display_name: Option<String>,
    pub size_bytes: Option<u64>,
    pub latest_version: Option<ComponentVersion>,
}

/// Local-state listing (`--only-local-state`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalListing {
    pub entries: Vec<LocalComponentEntry>,
    pub show_versions: bool,
}
