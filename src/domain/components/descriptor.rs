//! Catalog-side component model.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{AppError, ComponentId};

/// An opaque version token.
///
/// Versions are only ever compared for equality; no ordering is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentVersion(String);

impl ComponentVersion {
    /// Create a version token from a non-empty string (surrounding whitespace is trimmed).
    pub fn new(value: &str) -> Result<Self, AppError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidVersion(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ComponentVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ComponentVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ComponentVersion::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// A component as published in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique component identifier.
    pub id: ComponentId,
    /// Human-readable name.
    pub display_name: String,
    /// Download size in bytes.
    pub size_bytes: u64,
    /// Latest published version.
    pub latest_version: ComponentVersion,
}
