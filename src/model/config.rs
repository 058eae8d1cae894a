use anyhow::Result;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ShimConfig {
    pub namespace: NamespaceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceConfig {
    /// Global name the namespace object is published under.
    pub name: String,
    /// Entries also published directly on the global object.
    #[serde(default)]
    pub flat: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "hostbind=info".to_string()
}

/// Where a loaded configuration came from.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

#[cfg(not(target_arch = "wasm32"))]
impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => f.write_str("built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ShimConfig {
    /// The embedded defaults, with no user layer.
    pub fn defaults() -> Result<Self> {
        Ok(toml::from_str(DEFAULTS)?)
    }

    /// Load configuration with layering: defaults → user config.
    ///
    /// Runs before logging is up; callers log the returned source.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<(Self, ConfigSource)> {
        match Self::user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok((Self::defaults()?, ConfigSource::Defaults)),
        }
    }

    /// Loads `path` if it exists, otherwise the defaults. A present user file
    /// replaces the defaults as a whole.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource)> {
        if !path.exists() {
            return Ok((Self::defaults()?, ConfigSource::Defaults));
        }

        let user_str = fs::read_to_string(path)?;
        let config: ShimConfig = toml::from_str(&user_str)?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "hostbind")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
