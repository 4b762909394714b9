// SPDX-License-Identifier: MPL-2.0
//! The translation catalog: an immutable mapping from language code to a
//! flat table of text-key → localized string.
//!
//! One TOML file per language lives under `assets/lang/`; the file stem is
//! the language code, verbatim (`en.toml`, `zh_CN.toml`, ...). The catalog
//! is loaded once at panel startup and never mutated afterwards. Language
//! codes are raw strings rather than parsed locale identifiers: codes like
//! `zh_CN` must round-trip through persistence untouched, and unrecognized
//! codes are valid input that simply falls back at render time.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/lang/"]
struct Asset;

/// Language code of the default/fallback table. Always present in a loaded
/// catalog and expected to cover every key the rendered markup uses.
pub const DEFAULT_LANG: &str = "en";

/// Immutable language → (key → string) mapping.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Loads the catalog from the embedded `assets/lang/` folder.
    ///
    /// Fails if any file is not a flat TOML string table, or if the
    /// [`DEFAULT_LANG`] table is missing.
    pub fn embedded() -> Result<Self> {
        let mut tables = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(code) = filename.strip_suffix(".toml") {
                if let Some(content) = Asset::get(filename) {
                    let text = String::from_utf8_lossy(content.data.as_ref());
                    let table: HashMap<String, String> = toml::from_str(&text)
                        .map_err(|e| Error::Catalog(format!("{}: {}", filename, e)))?;
                    tables.insert(code.to_string(), table);
                }
            }
        }

        Self::from_tables(tables)
    }

    /// Builds a catalog from in-memory tables. Used by tests and by hosts
    /// that ship their own string set.
    pub fn from_tables(tables: HashMap<String, HashMap<String, String>>) -> Result<Self> {
        if !tables.contains_key(DEFAULT_LANG) {
            return Err(Error::Catalog(format!(
                "default language table '{}' is missing",
                DEFAULT_LANG
            )));
        }
        Ok(Self { tables })
    }

    /// Whether the catalog carries a table for `lang`.
    pub fn contains_language(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Looks up `key` in the table for `lang`. `None` for an unknown
    /// language or a key absent from that language; never an error and
    /// never a cross-language fallback.
    pub fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.tables.get(lang)?.get(key).map(String::as_str)
    }

    /// The full table for `lang`, if present.
    pub fn table(&self, lang: &str) -> Option<&HashMap<String, String>> {
        self.tables.get(lang)
    }

    /// Language codes with a table in this catalog, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}
