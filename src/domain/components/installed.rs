//! Installation-side component model.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{ComponentId, ComponentVersion};

/// A component recorded as installed in the local manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledRecord {
    pub id: ComponentId,
    pub installed_version: ComponentVersion,
}

/// Installed components keyed by id.
pub type InstalledComponents = BTreeMap<ComponentId, InstalledRecord>;
