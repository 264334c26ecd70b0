use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, CatalogSettings, CatalogSource, SdkConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkConfigDto {
    pub catalog: Option<CatalogConfigDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfigDto {
    pub url: Option<Url>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub cache_ttl_secs: Option<u64>,
}

impl SdkConfigDto {
    /// Fill unset values from defaults. `url_override` takes precedence over the file.
    pub fn into_config(self, url_override: Option<Url>) -> Result<SdkConfig, AppError> {
        let defaults = CatalogSettings::default();
        let dto = self.catalog.unwrap_or_default();

        let source = match url_override.or(dto.url) {
            Some(url) => CatalogSource::from_url(url)?,
            None => defaults.source,
        };

        let catalog = CatalogSettings {
            source,
            timeout_secs: dto.timeout_secs.unwrap_or(defaults.timeout_secs),
            max_retries: dto.max_retries.unwrap_or(defaults.max_retries),
            retry_delay_ms: dto.retry_delay_ms.unwrap_or(defaults.retry_delay_ms),
            cache_ttl_secs: dto.cache_ttl_secs.unwrap_or(defaults.cache_ttl_secs),
        };
        catalog.validate()?;

        Ok(SdkConfig { catalog })
    }
}
