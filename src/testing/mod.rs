mod fake_catalog_provider;
mod fake_manifest_reader;
mod fixtures;
mod memory_catalog_cache;

#[allow(unused_imports)]
pub use fake_catalog_provider::{CallCounter, FakeCatalogProvider};
#[allow(unused_imports)]
pub use fake_manifest_reader::FakeManifestReader;
#[allow(unused_imports)]
pub use fixtures::{descriptor, installed, sample_catalog};
#[allow(unused_imports)]
pub use memory_catalog_cache::MemoryCatalogCache;
