//! SDK-root-backed configuration loading and DTOs.
//!
//! Pure settings models live in `domain::configuration`.

mod config_dto;
mod load_config;

pub use load_config::{CATALOG_URL_ENV, load_config, load_config_with_override, parse_config};
