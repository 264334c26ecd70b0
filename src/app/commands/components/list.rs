//! Components list command - resolves installation status against the catalog.

use std::time::Instant;

use crate::app::AppContext;
use crate::domain::{AppError, ComponentListing, StatusResolver};
use crate::ports::{CatalogProvider, ManifestReader};

/// Options for `components list`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Include installed and latest versions in the output.
    pub show_versions: bool,
    /// Ignore a fresh cached catalog and fetch again.
    pub refresh: bool,
}

/// Execute the components list command.
///
/// Collaborator errors (catalog or manifest) are returned untouched.
pub fn execute<C: CatalogProvider, M: ManifestReader>(
    ctx: &AppContext<C, M>,
    options: ListOptions,
) -> Result<ComponentListing, AppError> {
    let started = Instant::now();

    let catalog = ctx.catalog().fetch_catalog()?;
    let installed = ctx.manifest().read_installed()?;

    let orphaned = StatusResolver::orphaned(&catalog, &installed);
    if !orphaned.is_empty() {
        let ids: Vec<&str> = orphaned.iter().map(|id| id.as_str()).collect();
        tracing::debug!(
            orphaned = %ids.join(", "),
            "installed components not listed in the catalog are omitted"
        );
    }

    let entries = StatusResolver::resolve(&catalog, &installed)?;

    tracing::debug!(
        catalog = %ctx.catalog().describe(),
        components = entries.len(),
        installed = installed.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "components list resolved"
    );

    Ok(ComponentListing { entries, show_versions: options.show_versions })
}
