//! Filesystem-backed catalog cache (`.sdk/cache/catalog.json`).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::{AppError, CachedCatalog};
use crate::ports::CatalogCacheStore;

#[derive(Debug, Clone)]
pub struct FilesystemCatalogCache {
    path: PathBuf,
}

impl FilesystemCatalogCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogCacheStore for FilesystemCatalogCache {
    fn load(&self) -> Result<Option<CachedCatalog>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let cached: CachedCatalog = serde_json::from_str(&content).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid catalog cache {}: {}", self.path.display(), e),
            )
        })?;
        Ok(Some(cached))
    }

    fn save(&self, catalog: &CachedCatalog) -> Result<(), AppError> {
        let parent = self.path.parent().ok_or_else(|| {
            AppError::config_error(format!("Invalid catalog cache path: {}", self.path.display()))
        })?;
        fs::create_dir_all(parent)?;

        let encoded = serde_json::to_string_pretty(catalog).map_err(io::Error::other)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(encoded.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }

    fn invalidate(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
