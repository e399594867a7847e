//! User settings loaded from YAML
//!
//! Settings are optional. The file named by `PLUGINIFY_CONFIG` is used when
//! set, otherwise `~/.pluginify.yaml` if it exists.

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV: &str = "PLUGINIFY_CONFIG";

/// Settings file looked up in the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".pluginify.yaml";

/// Version written into freshly generated plugins
pub const DEFAULT_PLUGIN_VERSION: &str = "0.1";

/// Overrides and defaults for generated content
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Author name, wins over the probed username
    #[serde(default)]
    pub author: Option<String>,

    /// Contact email, wins over the probed email
    #[serde(default)]
    pub email: Option<String>,

    /// Platform version, wins over the version found from the working directory
    #[serde(default)]
    pub platform_version: Option<String>,

    /// Version of the generated plugin (defaults to "0.1")
    #[serde(default)]
    pub plugin_version: Option<String>,

    /// Year in the licence notice (defaults to the current year)
    #[serde(default)]
    pub copyright_year: Option<i32>,
}

impl Settings {
    /// Load settings from an explicit path or the default location
    ///
    /// An explicit path must exist. The default file is optional.
    pub fn load(explicit: Option<&Path>, home: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match home.map(|h| h.join(DEFAULT_CONFIG_FILE)) {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse settings from YAML text (an empty document yields defaults)
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Plugin version to write
    pub fn plugin_version(&self) -> &str {
        self.plugin_version
            .as_deref()
            .unwrap_or(DEFAULT_PLUGIN_VERSION)
    }

    /// Copyright year to write
    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}
