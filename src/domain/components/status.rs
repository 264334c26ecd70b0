use serde::Serialize;

use crate::domain::{ComponentDescriptor, ComponentVersion};

/// Installation status of a catalog component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentStatus {
    NotInstalled,
    UpToDate,
    UpdateAvailable,
}

impl ComponentStatus {
    /// Label shown in listings.
    pub fn label(self) -> &'static str {
        match self {
            ComponentStatus::NotInstalled => "Not Installed",
            ComponentStatus::UpToDate => "Installed",
            ComponentStatus::UpdateAvailable => "Update Available",
        }
    }
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a resolved listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub descriptor: ComponentDescriptor,
    pub installed_version: Option<ComponentVersion>,
    pub status: ComponentStatus,
}
