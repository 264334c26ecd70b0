//! Catalog provider reading a local snapshot file (mirrors, offline installs).

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, ComponentDescriptor, parse_catalog_document};
use crate::ports::CatalogProvider;

#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for FileCatalogProvider {
    fn fetch_catalog(&self) -> Result<Vec<ComponentDescriptor>, AppError> {
        let origin = self.describe();
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::catalog_unavailable(&origin, e.to_string()))?;

        Ok(parse_catalog_document(&content, &origin)?.components)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
