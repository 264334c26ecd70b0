mod catalog_cache_store;
mod catalog_provider;
mod manifest_reader;

pub use catalog_cache_store::CatalogCacheStore;
pub use catalog_provider::CatalogProvider;
pub use manifest_reader::ManifestReader;
