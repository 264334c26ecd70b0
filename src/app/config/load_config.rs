//! Tool configuration loading from the SDK root.

use std::fs;
use std::io;
use std::path::Path;

use url::Url;

use super::config_dto::SdkConfigDto;
use crate::domain::configuration::paths;
use crate::domain::{AppError, SdkConfig};

/// Environment variable overriding `catalog.url`.
pub const CATALOG_URL_ENV: &str = "SDKC_CATALOG_URL";

/// Load `.sdk/config.toml` under `root`, falling back to defaults when absent.
///
/// `SDKC_CATALOG_URL`, when set, replaces `catalog.url`.
pub fn load_config(root: &Path) -> Result<SdkConfig, AppError> {
    let url_override = parse_url_override(std::env::var(CATALOG_URL_ENV).ok())?;
    load_config_with_override(root, url_override)
}

/// Load the config under `root` with an explicit catalog URL override.
pub fn load_config_with_override(
    root: &Path,
    url_override: Option<Url>,
) -> Result<SdkConfig, AppError> {
    let config_path = paths::config(root);
    let content = match fs::read_to_string(&config_path) {
        Ok(content) => Some(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(err.into()),
    };

    parse_config(content.as_deref(), &config_path.display().to_string(), url_override)
}

fn parse_url_override(raw: Option<String>) -> Result<Option<Url>, AppError> {
    match raw.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Url::parse(raw).map(Some).map_err(|e| {
            AppError::config_error(format!("{} is not a valid URL: {}", CATALOG_URL_ENV, e))
        }),
        _ => Ok(None),
    }
}

/// Parse config content (if any) read from `path`.
pub fn parse_config(
    content: Option<&str>,
    path: &str,
    url_override: Option<Url>,
) -> Result<SdkConfig, AppError> {
    let dto: SdkConfigDto = match content {
        Some(content) => toml::from_str(content).map_err(|e| AppError::ConfigParse {
            path: path.to_string(),
            details: e.message().to_string(),
        })?,
        None => SdkConfigDto::default(),
    };

    dto.into_config(url_override)
}
