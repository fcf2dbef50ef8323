use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// The configuration file structure.
///
/// Corresponds to `~/.config/cctr/config.yaml`. Both keys are optional;
/// an absent file is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The user's native language (ISO 639-1 code). Decides translation
    /// direction when no explicit `--to` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_language: Option<String>,
    /// Default model alias or full model identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

/// Extracts a language code from the process locale.
///
/// Parses `LC_ALL` then `LANG` (e.g. `ja_JP.UTF-8` -> `ja`). The `C` and
/// `POSIX` locales carry no language information and yield `None`.
pub fn system_language() -> Option<String> {
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| parse_locale(&value))
}

fn parse_locale(value: &str) -> Option<String> {
    let lang: String = value
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    match lang.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(lang.to_lowercase()),
    }
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/cctr/config.yaml`
    /// or `~/.config/cctr/config.yaml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.yaml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config: Config = serde_yaml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config)
    }

    /// Loads the config, treating an absent file as empty defaults.
    ///
    /// A file that exists but cannot be read or parsed is an error; it
    /// is never silently replaced with defaults, so a typo in the file
    /// cannot masquerade as missing configuration.
    pub fn load_if_present(&self) -> Result<Config> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(Config::default())
        }
    }

    /// Like [`Self::load_if_present`], with a missing `native_language`
    /// filled from the system locale so first runs work without setup.
    pub fn load_or_default(&self) -> Result<Config> {
        let mut config = self.load_if_present()?;
        if config.native_language.is_none() {
            config.native_language = system_language();
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_yaml::to_string(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}
