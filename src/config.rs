use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{error::LocaleError, DEFAULT_LOCALE};

pub static CONFIG_FILE: &str = "locale.toml";

/// The `locale.toml` config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // The locale used when a key is missing in the current locale.
    #[serde(default = "Config::default_locale")]
    pub default_locale: String,
    // The initial active locale, unset means the default locale.
    #[serde(default)]
    pub locale: Option<String>,
    // The dictionary directory, relative to the config file.
    #[serde(default = "Config::default_dictionaries")]
    pub dictionaries: PathBuf,
    // The initial route path.
    #[serde(default = "Config::default_path")]
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Self::default_locale(),
            locale: None,
            dictionaries: Self::default_dictionaries(),
            path: Self::default_path(),
        }
    }
}

impl Config {
    const DEFAULT_DICTIONARIES: &'static str = "locales";
    const DEFAULT_PATH: &'static str = "/";

    fn default_locale() -> String {
        DEFAULT_LOCALE.to_string()
    }

    fn default_dictionaries() -> PathBuf {
        PathBuf::from(Self::DEFAULT_DICTIONARIES)
    }

    fn default_path() -> String {
        Self::DEFAULT_PATH.to_string()
    }

    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self, LocaleError> {
        toml::from_str(content).map_err(|err| LocaleError::InvalidConfig {
            path: path.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Read the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config `{}`", path.display()))?;
        let mut config = Self::from_toml_str(path, &content)?;
        // Dictionaries are relative to the config file.
        if let Some(parent) = path.parent() {
            if config.dictionaries.is_relative() {
                config.dictionaries = parent.join(&config.dictionaries);
            }
        }
        Ok(config)
    }

    /// Read `locale.toml` in `dir`, or use the defaults rooted at `dir`
    /// if there is no such file.
    pub fn locate(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no `{CONFIG_FILE}` found, use defaults");
            Ok(Config {
                dictionaries: dir.join(Self::DEFAULT_DICTIONARIES),
                ..Default::default()
            })
        }
    }
}
