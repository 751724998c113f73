//! Message translation seam.
//!
//! Messages are looked up by their English `msgid`, gettext style, and
//! `{name}` placeholders are filled in after translation.

use std::collections::HashMap;
use std::path::Path;

use crate::error::LoadError;

pub const FIELD_REQUIRED_MSGID: &str = "This field is required.";
pub const INVALID_VALUE_MSGID: &str = "Invalid value for {field}: {reason}";
pub const NOT_FOUND_MSGID: &str = "{entity} with id {id} does not exist.";

/// Message lookup injected into each validation call.
pub trait Translate: Send + Sync {
    fn gettext(&self, msgid: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn gettext(&self, msgid: &str) -> String {
        self(msgid)
    }
}

/// Returns every `msgid` as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// Table of translations keyed by `msgid`. Unknown ids fall back to the id.
///
/// TOML format, one `"msgid" = "translation"` pair per line:
///
/// ```toml
/// "This field is required." = "Ce champ est obligatoire."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, msgid: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(msgid.into(), translation.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Errors
    ///
    /// Returns `LoadError::Catalog` if the TOML is malformed or a value is not
    /// a string.
    pub fn from_toml_str(toml: &str) -> Result<Self, LoadError> {
        let entries: HashMap<String, String> = toml::from_str(toml)?;
        Ok(Self { entries })
    }

    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, or
    /// `LoadError::Catalog` if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let toml = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&toml)
    }
}

impl Translate for Catalog {
    fn gettext(&self, msgid: &str) -> String {
        self.entries
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }
}

/// Translate `msgid` and substitute `{name}` placeholders.
#[must_use]
pub fn render(messages: &dyn Translate, msgid: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(messages.gettext(msgid), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
