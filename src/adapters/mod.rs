//! Adapters implementing the port traits against the filesystem and network.

pub mod catalog_cache_filesystem;
pub mod catalog_caching;
pub mod catalog_file;
pub mod catalog_http;
pub mod catalog_retrying;
pub mod manifest_filesystem;

pub use catalog_cache_filesystem::FilesystemCatalogCache;
pub use catalog_caching::CachingCatalogProvider;
pub use catalog_file::FileCatalogProvider;
pub use catalog_http::HttpCatalogProvider;
pub use catalog_retrying::{RetryPolicy, RetryingCatalogProvider};
pub use manifest_filesystem::FilesystemManifestReader;
