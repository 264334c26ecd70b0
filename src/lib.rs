//! sdkc: inspect SDK components against a published catalog.
//!
//! Merges the catalog of available components with the local installation
//! manifest and reports each component's status.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ListOptions, list_components, list_components_at, list_local_components_at,
};
pub use domain::{
    AppError, ComponentDescriptor, ComponentId, ComponentListing, ComponentStatus,
    ComponentVersion, InstalledComponents, InstalledRecord, LocalComponentEntry, LocalListing,
    StatusEntry, StatusResolver,
};
pub use ports::{CatalogProvider, ManifestReader};
