//! Configuration loading and validation for Capacitor app projects.
//!
//! Uses serde_json to load `capacitor.config.json` and expose the
//! application record (`appId`, `appName`, `webDir`) that the packaging
//! tool consumes when wrapping built web assets in a native shell.

mod app_id;
mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Canonical config file name looked up by [`AppConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "capacitor.config.json";

/// Config sources the packaging tool accepts but this crate cannot evaluate.
const UNSUPPORTED_CONFIG_FILES: &[&str] = &["capacitor.config.ts", "capacitor.config.js"];

/// Application configuration record.
///
/// Mirrors the camelCase keys of `capacitor.config.json`. All three fields
/// are required; keys this crate does not model are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Reverse-DNS application identifier (e.g. "io.ionic.starter"),
    /// required to be globally unique for app-store packaging.
    pub app_id: String,
    /// Human-readable name shown for the installed app.
    pub app_name: String,
    /// Directory of built web assets, relative to the app root.
    /// Expected to exist at build time; checked by the packaging tool.
    pub web_dir: String,
}

impl AppConfig {
    /// Load configuration from a JSON file at the given path.
    ///
    /// Parses the file and validates the record before returning it, so a
    /// successful load always yields a structurally sound configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;

        config.validate()?;

        debug!(path = %path.display(), app_id = %config.app_id, "loaded app configuration");
        Ok(config)
    }

    /// Locate and load the configuration for the app rooted at `app_root`.
    ///
    /// Looks for `capacitor.config.json` in the app root. A TypeScript or
    /// JavaScript config found instead is reported as unsupported rather
    /// than not found, since it carries the same record in a form this
    /// crate cannot evaluate.
    pub fn discover<P: AsRef<Path>>(app_root: P) -> Result<Self, ConfigError> {
        let app_root = app_root.as_ref();

        let path = app_root.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Self::load(path);
        }

        for name in UNSUPPORTED_CONFIG_FILES {
            let candidate = app_root.join(name);
            if candidate.exists() {
                return Err(ConfigError::Unsupported(candidate));
            }
        }

        Err(ConfigError::NotFound(app_root.to_path_buf()))
    }

    /// Write the configuration as pretty-printed JSON at the given path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let mut content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        content.push('\n');

        fs::write(path, content).map_err(ConfigError::WriteFile)?;

        debug!(path = %path.display(), "wrote app configuration");
        Ok(())
    }

    /// Validate the configuration record.
    ///
    /// Checks the structural constraints: all three fields non-empty,
    /// `appId` a reverse-DNS identifier and `webDir` relative to the app
    /// root. Whether `webDir` actually exists is the consuming tool's
    /// concern and is not checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.is_empty() {
            return Err(ConfigError::Validation("appId is required".into()));
        }
        app_id::validate_app_id(&self.app_id).map_err(ConfigError::Validation)?;

        if self.app_name.is_empty() {
            return Err(ConfigError::Validation("appName is required".into()));
        }

        if self.web_dir.is_empty() {
            return Err(ConfigError::Validation("webDir is required".into()));
        }
        if Path::new(&self.web_dir).is_absolute() {
            return Err(ConfigError::Validation(format!(
                "webDir must be relative to the app root: {}",
                self.web_dir
            )));
        }

        Ok(())
    }

    /// Resolve `webDir` against the app root.
    pub fn web_dir_path<P: AsRef<Path>>(&self, app_root: P) -> PathBuf {
        app_root.as_ref().join(&self.web_dir)
    }
}
