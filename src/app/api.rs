//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! adapter wiring, and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    CachingCatalogProvider, FileCatalogProvider, FilesystemCatalogCache, FilesystemManifestReader,
    HttpCatalogProvider, RetryPolicy, RetryingCatalogProvider,
};
use crate::app::config::load_config;
use crate::app::{AppContext, commands::components};
use crate::domain::configuration::paths;
use crate::domain::{CachePolicy, CatalogSettings, CatalogSource};
use crate::ports::CatalogProvider;

pub use crate::app::commands::components::ListOptions;
pub use crate::domain::{
    AppError, ComponentListing, ComponentStatus, LocalComponentEntry, LocalListing, StatusEntry,
};

/// Build the catalog provider stack for the configured source.
///
/// HTTP sources are retried; every source is fronted by the on-disk cache.
fn catalog_provider(
    root: &Path,
    settings: &CatalogSettings,
    refresh: bool,
) -> Result<CachingCatalogProvider<Box<dyn CatalogProvider>, FilesystemCatalogCache>, AppError> {
    let inner: Box<dyn CatalogProvider> = match &settings.source {
        CatalogSource::File(path) => Box::new(FileCatalogProvider::new(path.clone())),
        CatalogSource::Http(url) => {
            let http = HttpCatalogProvider::new(url.clone(), settings.timeout_secs)?;
            Box::new(RetryingCatalogProvider::new(
                Box::new(http),
                RetryPolicy::from_settings(settings),
            ))
        }
    };

    let store = FilesystemCatalogCache::new(paths::catalog_cache(root));
    let policy = CachePolicy::new(settings.cache_ttl()).with_force_refresh(refresh);
    Ok(CachingCatalogProvider::new(inner, store, policy))
}

// =============================================================================
// Components List API
// =============================================================================

/// List catalog components with their installation status for the current directory.
pub fn list_components(options: ListOptions) -> Result<ComponentListing, AppError> {
    list_components_at(std::env::current_dir()?, options)
}

/// List catalog components with their installation status for the SDK at `root`.
pub fn list_components_at(
    root: impl Into<PathBuf>,
    options: ListOptions,
) -> Result<ComponentListing, AppError> {
    let root = root.into();
    let config = load_config(&root)?;
    tracing::debug!(
        root = %root.display(),
        catalog = %config.catalog.source.describe(),
        "listing components"
    );

    let catalog = catalog_provider(&root, &config.catalog, options.refresh)?;
    let manifest = FilesystemManifestReader::new(paths::installed_manifest(&root));
    let ctx = AppContext::new(catalog, manifest);

    components::list(&ctx, options)
}

/// List installed components for the SDK at `root` without contacting the catalog.
pub fn list_local_components_at(
    root: impl Into<PathBuf>,
    show_versions: bool,
) -> Result<LocalListing, AppError> {
    let root = root.into();
    let manifest = FilesystemManifestReader::new(paths::installed_manifest(&root));
    let cache = FilesystemCatalogCache::new(paths::catalog_cache(&root));

    components::list_local(&manifest, &cache, show_versions)
}
