//! Message catalog configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default locale tag.
fn default_locale() -> String {
    String::from("en")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagesConfig {
    /// TOML catalog mapping message ids to translated text.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Locale of the catalog. Informational only.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            locale: default_locale(),
        }
    }
}

impl MessagesConfig {
    /// Whether a catalog replaces the untranslated messages.
    #[must_use]
    pub const fn is_translated(&self) -> bool {
        self.catalog_path.is_some()
    }
}
