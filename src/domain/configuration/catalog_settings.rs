use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::domain::AppError;

/// Where the catalog document is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Http(Url),
    File(PathBuf),
}

impl CatalogSource {
    /// Classify a catalog URL by scheme.
    pub fn from_url(url: Url) -> Result<Self, AppError> {
        match url.scheme() {
            "http" | "https" => Ok(CatalogSource::Http(url)),
            "file" => url.to_file_path().map(CatalogSource::File).map_err(|_| {
                AppError::config_error(format!("catalog.url '{}' is not a valid file path", url))
            }),
            other => Err(AppError::config_error(format!(
                "catalog.url scheme '{}' is not supported (use http, https, or file)",
                other
            ))),
        }
    }

    /// Display form used in logs and errors.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Http(url) => url.to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

/// Catalog fetch and cache settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub source: CatalogSource,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum fetch attempts.
    pub max_retries: u32,
    /// Base delay between attempts.
    pub retry_delay_ms: u64,
    /// How long a cached catalog is served without refetching.
    pub cache_ttl_secs: u64,
}

impl CatalogSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("catalog.timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::config_error("catalog.max_retries must be at least 1"));
        }
        Ok(())
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: CatalogSource::Http(default_catalog_url()),
            timeout_secs: 30,
            max_retries: 3,
            retry_delay_ms: 500,
            cache_ttl_secs: 3600,
        }
    }
}

pub fn default_catalog_url() -> Url {
    Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid")
}

const DEFAULT_CATALOG_URL: &str = "https://dl.sdkc.dev/channels/stable/components-v1.json";

/// Top-level tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkConfig {
    pub catalog: CatalogSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_url_is_http_source() {
        let source =
            CatalogSource::from_url(Url::parse("https://example.com/c.json").unwrap()).unwrap();
        assert!(matches!(source, CatalogSource::Http(_)));
    }

    #[test]
    fn file_url_is_file_source() {
        let source = CatalogSource::from_url(Url::parse("file:///srv/mirror/c.json").unwrap())
            .unwrap();
        assert_eq!(source, CatalogSource::File(PathBuf::from("/srv/mirror/c.json")));
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let err = CatalogSource::from_url(Url::parse("ftp://example.com/c.json").unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("ftp")));
    }

    #[test]
    fn defaults_validate() {
        let settings = CatalogSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.cache_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn zero_retries_is_rejected() {
        let settings = CatalogSettings { max_retries: 0, ..CatalogSettings::default() };
        assert!(settings.validate().is_err());
    }
}
