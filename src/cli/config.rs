//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::search::LanguageProfile;
use crate::store::StoreLocation;

/// Database used when neither the CLI nor the config file names one.
pub const DEFAULT_DATABASE: &str = "folio.db";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default database location, a path or `:memory:`
    pub database: Option<String>,

    /// Default language profile
    pub language: Option<LanguageProfile>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/folio/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.toml")
    }

    /// Resolve the database location, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--database` argument
    /// 2. Config file `database` setting
    /// 3. `folio.db` in the current directory
    ///
    /// A blank value is an error rather than a silent throwaway database.
    pub fn database(&self, cli_database: Option<&str>) -> Result<StoreLocation> {
        let raw = cli_database
            .or(self.database.as_deref())
            .unwrap_or(DEFAULT_DATABASE);
        raw.parse::<StoreLocation>()
            .with_context(|| format!("invalid database location: {raw:?}"))
    }

    /// Resolve the language profile: CLI, then config file, then `simple`.
    pub fn language(&self, cli_language: Option<LanguageProfile>) -> LanguageProfile {
        cli_language.or(self.language).unwrap_or_default()
    }
}
