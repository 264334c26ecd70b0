//! Components list for local state only (`--only-local-state`).

use std::collections::BTreeMap;

use crate::domain::{
    AppError, ComponentId, LocalComponentEntry, LocalListing, ensure_unique_ids,
};
use crate::ports::{CatalogCacheStore, ManifestReader};

/// List installed components without contacting the catalog.
///
/// Catalog details come from the cached snapshot regardless of its age; a missing
/// unreadable, or duplicated-id cache only leaves them blank.
pub fn execute<M: ManifestReader, S: CatalogCacheStore>(
    manifest: &M,
    cache: &S,
    show_versions: bool,
) -> Result<LocalListing, AppError> {
    let installed = manifest.read_installed()?;

    let cached = match cache.load() {
        Ok(Some(cached)) if ensure_unique_ids(&cached.components).is_err() => {
            tracing::warn!("ignoring cached catalog with duplicate component ids");
            None
        }
        Ok(cached) => cached,
        Err(err) => {
            tracing::warn!("ignoring unreadable catalog cache: {err}");
            None
        }
    };
    let known: BTreeMap<&ComponentId, _> = cached
        .as_ref()
        .map(|c| c.components.iter().map(|d| (&d.id, d)).collect())
        .unwrap_or_default();

    let entries = installed
        .values()
        .map(|record| {
            let descriptor = known.get(&record.id);
            LocalComponentEntry {
                id: record.id.clone(),
                installed_version: record.installed_version.clone(),
                display_name: descriptor.map(|d| d.display_name.clone()),
                size_bytes: descriptor.map(|d| d.size_bytes),
                latest_version: descriptor.map(|d| d.latest_version.clone()),
            }
        })
        .collect();

    Ok(LocalListing { entries, show_versions })
}
