//! Locations of tool state under the SDK root.

use std::path::{Path, PathBuf};

/// State directory name under the SDK root.
pub const SDK_STATE_DIR: &str = ".sdk";

/// `.sdk/`
pub fn state_dir(root: &Path) -> PathBuf {
    root.join(SDK_STATE_DIR)
}

/// `.sdk/config.toml`
pub fn config(root: &Path) -> PathBuf {
    state_dir(root).join("config.toml")
}

/// `.sdk/installed.toml`
pub fn installed_manifest(root: &Path) -> PathBuf {
    state_dir(root).join("installed.toml")
}

/// `.sdk/cache/catalog.json`
pub fn catalog_cache(root: &Path) -> PathBuf {
    state_dir(root).join("cache").join("catalog.json")
}
