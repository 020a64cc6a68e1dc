//! Localized message strings, keyed by a small fixed vocabulary.
//!
//! The table is embedded at compile time and parsed once at startup. Only
//! `en` ships today; the language axis exists so adding a table does not
//! touch call sites.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;

const RAW_TABLE: &str = include_str!("../messages.toml");

/// Language the runners look up by default.
pub const LANGUAGE: &str = "en";

/// String table mapping language, then message key, to text.
#[derive(Debug, Clone, Deserialize)]
pub struct Messages {
    #[serde(flatten)]
    languages: HashMap<String, HashMap<String, String>>,
}

impl Messages {
    /// Parses the embedded table.
    pub fn load() -> anyhow::Result<Self> {
        toml::from_str(RAW_TABLE).context("parsing embedded messages.toml")
    }

    /// Looks up a message in the default language.
    ///
    /// An unknown key falls back to the key itself so a missing string shows
    /// up on screen instead of killing the game.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.languages
            .get(LANGUAGE)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}
