//! # civ-config
//!
//! Layered configuration loading for the civ serializers using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CIV_*` prefix, `__` as separator)
//! 2. Project-level `.civ/config.toml`
//! 3. User-level `~/.config/civ/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CIV_VALIDATION__EMPTY_IDS` -> `validation.empty_ids`,
//! `CIV_MESSAGES__CATALOG_PATH` -> `messages.catalog_path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use civ_config::CivConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = CivConfig::load_with_dotenv().expect("config");
//!
//! if let Some(path) = &config.messages.catalog_path {
//!     println!("Messages from {}", path.display());
//! }
//! ```

mod error;
mod general;
mod messages;
mod validation;

pub use error::ConfigError;
pub use general::{GeneralConfig, OutputFormat};
pub use messages::MessagesConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CivConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CivConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`CivConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse, or
    /// `ConfigError::InvalidValue` if the merged values fail [`CivConfig::check`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`CivConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and check a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`CivConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.check()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".civ/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CIV_").split("__"))
    }

    /// Reject values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty locale or a catalog
    /// path that is not a file.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.messages.locale.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "messages.locale".into(),
                reason: "must not be empty".into(),
            });
        }

        if let Some(path) = &self.messages.catalog_path
            && !path.is_file()
        {
            return Err(ConfigError::InvalidValue {
                field: "messages.catalog_path".into(),
                reason: format!("{} is not a readable file", path.display()),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("civ").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
