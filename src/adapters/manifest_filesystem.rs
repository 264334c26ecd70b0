//! Filesystem-backed installation manifest reader (`.sdk/installed.toml`).

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::manifest::parse_manifest_content;
use crate::domain::{AppError, InstalledComponents};
use crate::ports::ManifestReader;

#[derive(Debug, Clone)]
pub struct FilesystemManifestReader {
    path: PathBuf,
}

impl FilesystemManifestReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestReader for FilesystemManifestReader {
    fn read_installed(&self) -> Result<InstalledComponents, AppError> {
        let path_str = self.path.display().to_string();
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path_str, "no installation manifest; nothing installed");
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                return Err(AppError::LocalManifestCorrupt { path: path_str, reason: err.to_string() });
            }
        };

        parse_manifest_content(&content, &path_str)
    }
}
