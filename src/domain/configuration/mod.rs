mod catalog_settings;
pub mod paths;

pub use catalog_settings::{CatalogSettings, CatalogSource, SdkConfig, default_catalog_url};
