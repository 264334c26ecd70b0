use std::io;
use std::sync::Mutex;

use crate::domain::{AppError, CachedCatalog};
use crate::ports::CatalogCacheStore;

/// In-memory catalog cache.
#[derive(Default)]
pub struct MemoryCatalogCache {
    snapshot: Mutex<Option<CachedCatalog>>,
    corrupt: Mutex<bool>,
}

impl MemoryCatalogCache {
    pub fn with(snapshot: CachedCatalog) -> Self {
        Self { snapshot: Mutex::new(Some(snapshot)), corrupt: Mutex::new(false) }
    }

    /// A store whose contents fail to load until overwritten.
    pub fn corrupt() -> Self {
        Self { snapshot: Mutex::new(None), corrupt: Mutex::new(true) }
    }

    pub fn snapshot(&self) -> Option<CachedCatalog> {
        self.snapshot.lock().unwrap().clone()
    }
}

impl CatalogCacheStore for MemoryCatalogCache {
    fn load(&self) -> Result<Option<CachedCatalog>, AppError> {
        if *self.corrupt.lock().unwrap() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt cache").into());
        }
        Ok(self.snapshot())
    }

    fn save(&self, catalog: &CachedCatalog) -> Result<(), AppError> {
        *self.corrupt.lock().unwrap() = false;
        *self.snapshot.lock().unwrap() = Some(catalog.clone());
        Ok(())
    }

    fn invalidate(&self) -> Result<(), AppError> {
        *self.corrupt.lock().unwrap() = false;
        *self.snapshot.lock().unwrap() = None;
        Ok(())
    }
}
