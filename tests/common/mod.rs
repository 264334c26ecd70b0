//! Shared testing utilities for sdkc CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

/// Catalog document listing three components.
pub const SAMPLE_CATALOG: &str = r#"{
  "schema_version": 1,
  "revision": "2024.06.01",
  "components": [
    {"id": "gcloud", "display_name": "Cloud SDK Core Libraries", "size_bytes": 21402343, "version": "2.0"},
    {"id": "bq", "display_name": "BigQuery Command Line Tool", "size_bytes": 1700000, "version": "3.1"},
    {"id": "kubectl", "display_name": "kubectl", "size_bytes": 95000000, "version": "1.29.1"}
  ]
}"#;

/// Testing harness providing an isolated SDK root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    sdk_root: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty SDK root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let sdk_root = root.path().join("sdk");
        fs::create_dir_all(&sdk_root).expect("Failed to create test SDK root");
        Self { root, sdk_root }
    }

    /// Path to the SDK installation root.
    pub fn sdk_root(&self) -> &Path {
        &self.sdk_root
    }

    /// Path to the `.sdk` state directory.
    pub fn state_dir(&self) -> PathBuf {
        self.sdk_root.join(".sdk")
    }

    /// Path to the on-disk catalog cache.
    pub fn cache_path(&self) -> PathBuf {
        self.state_dir().join("cache").join("catalog.json")
    }

    /// Build a command for invoking the compiled `sdkc` binary against the SDK root.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_bare();
        cmd.arg("--sdk-root").arg(&self.sdk_root);
        cmd
    }

    /// Build a command run from the SDK root without `--sdk-root`.
    pub fn cli_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("sdkc").expect("Failed to locate sdkc binary");
        cmd.current_dir(&self.sdk_root)
            .env_remove("SDKC_CATALOG_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a catalog document outside the SDK root and return its path.
    pub fn write_catalog(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("catalog.json");
        fs::write(&path, content).expect("Failed to write catalog");
        path
    }

    /// `file://` URL for a catalog path.
    pub fn file_url(path: &Path) -> String {
        Url::from_file_path(path).expect("absolute catalog path").to_string()
    }

    /// Write `.sdk/config.toml` with the given body.
    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.state_dir()).expect("Failed to create state dir");
        fs::write(self.state_dir().join("config.toml"), content).expect("Failed to write config");
    }

    /// Point the SDK config at a local catalog file.
    pub fn use_catalog(&self, content: &str) -> PathBuf {
        let path = self.write_catalog(content);
        self.write_config(&format!("[catalog]\nurl = \"{}\"\n", Self::file_url(&path)));
        path
    }

    /// Record installed components in `.sdk/installed.toml`.
    pub fn install(&self, components: &[(&str, &str)]) {
        let mut content = String::from("schema_version = 1\n");
        for (id, version) in components {
            content.push_str(&format!("\n[[components]]\nid = \"{}\"\nversion = \"{}\"\n", id, version));
        }
        self.write_manifest(&content);
    }

    /// Write raw manifest content.
    pub fn write_manifest(&self, content: &str) {
        fs::create_dir_all(self.state_dir()).expect("Failed to create state dir");
        fs::write(self.state_dir().join("installed.toml"), content)
            .expect("Failed to write manifest");
    }
}
