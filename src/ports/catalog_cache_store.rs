//! Catalog cache storage port definition.

use crate::domain::{AppError, CachedCatalog};

/// Persistent storage for the last fetched catalog snapshot.
pub trait CatalogCacheStore {
    /// Load the stored snapshot, if any.
    fn load(&self) -> Result<Option<CachedCatalog>, AppError>;

    /// Replace the stored snapshot.
    fn save(&self, catalog: &CachedCatalog) -> Result<(), AppError>;

    /// Drop the stored snapshot. Succeeds when nothing is stored.
    fn invalidate(&self) -> Result<(), AppError>;
}
