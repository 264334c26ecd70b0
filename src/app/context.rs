use crate::ports::{CatalogProvider, ManifestReader};

/// Application context holding the collaborators a listing needs.
pub struct AppContext<C: CatalogProvider, M: ManifestReader> {
    catalog: C,
    manifest: M,
}

impl<C: CatalogProvider, M: ManifestReader> AppContext<C, M> {
    /// Create a new application context.
    pub fn new(catalog: C, manifest: M) -> Self {
        Self { catalog, manifest }
    }

    /// Get a reference to the catalog provider.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the installation manifest reader.
    pub fn manifest(&self) -> &M {
        &self.manifest
    }
}
