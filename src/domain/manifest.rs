//! Pure parse/validate for the local installation manifest (`.sdk/installed.toml`).

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{AppError, ComponentId, ComponentVersion, InstalledComponents, InstalledRecord};

const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallManifest {
    pub schema_version: u32,
    #[serde(default)]
    pub components: Vec<InstallManifestEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallManifestEntry {
    pub id: String,
    pub version: String,
}

impl InstallManifest {
    /// Validate entries and index them by id.
    ///
    /// Returns the reason string on failure; callers attach the manifest path.
    pub fn to_installed(&self) -> Result<InstalledComponents, String> {
        if self.schema_version != MANIFEST_SCHEMA_VERSION {
            return Err(format!(
                "unsupported schema_version {} (expected {})",
                self.schema_version, MANIFEST_SCHEMA_VERSION
            ));
        }

        let mut installed: InstalledComponents = BTreeMap::new();
        for entry in &self.components {
            let id = ComponentId::new(&entry.id).map_err(|e| e.to_string())?;
            let installed_version = ComponentVersion::new(&entry.version)
                .map_err(|e| format!("component '{}': {}", id, e))?;

            if installed.contains_key(&id) {
                return Err(format!("component '{}' is recorded more than once", id));
            }
            installed.insert(id.clone(), InstalledRecord { id, installed_version });
        }

        Ok(installed)
    }
}

/// Parse manifest content read from `path`.
pub fn parse_manifest_content(content: &str, path: &str) -> Result<InstalledComponents, AppError> {
    let corrupt =
        |reason: String| AppError::LocalManifestCorrupt { path: path.to_string(), reason };

    let manifest: InstallManifest =
        toml::from_str(content).map_err(|e| corrupt(e.message().to_string()))?;
    manifest.to_installed().map_err(corrupt)
}
