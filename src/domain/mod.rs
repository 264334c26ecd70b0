pub mod catalog;
pub mod components;
pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod manifest;

pub use catalog::{CachePolicy, CachedCatalog, CatalogDocument, parse_catalog_document};
pub use components::{
    ComponentDescriptor, ComponentListing, ComponentStatus, ComponentVersion, InstalledComponents,
    InstalledRecord, LocalComponentEntry, LocalListing, StatusEntry, StatusResolver, ensure_unique_ids,
};
pub use configuration::{CatalogSettings, CatalogSource, SdkConfig};
pub use error::AppError;
pub use identifiers::ComponentId;
