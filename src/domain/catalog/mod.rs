//! Catalog documents and cached snapshots.

mod cache;
mod document;

pub use cache::{CachePolicy, CachedCatalog};
pub use document::{CatalogDocument, parse_catalog_document};
