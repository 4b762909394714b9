// SPDX-License-Identifier: MPL-2.0
//! Persisted panel preferences, stored as named string slots in a TOML
//! file (the panel's counterpart of the webview's `localStorage`).
//!
//! The language preference is the only slot the core itself writes (under
//! [`LANG_PREF_KEY`]); it is scoped to the host application instance, read
//! once at panel load and written only on an explicit override.
//!
//! # Path Resolution
//!
//! 1. Explicit path via [`PrefStore::open_at`] (tests, portable installs)
//! 2. `STUDIO_GUIDE_CONFIG_DIR` environment variable
//! 3. Platform config directory via the `dirs` crate
//!
//! Storage being unavailable is not an error for callers: loading falls
//! back to an empty store and writes are best-effort, so the language
//! resolver never fails on a broken disk.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Preference file name within the config directory.
const PREFS_FILE: &str = "webprefs.toml";

/// Application directory name used under the platform config dir.
const APP_NAME: &str = "StudioGuide";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "STUDIO_GUIDE_CONFIG_DIR";

/// Slot name of the persisted language preference.
pub const LANG_PREF_KEY: &str = "QIDIWebLang";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Slots(HashMap<String, String>);

/// Named-slot string store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct PrefStore {
    slots: Slots,
    path: Option<PathBuf>,
}

impl PrefStore {
    /// Opens the store at its default location. A missing or unreadable
    /// file yields an empty store.
    pub fn open() -> Self {
        match default_prefs_path() {
            Some(path) => Self::open_at(path),
            None => Self::in_memory(),
        }
    }

    /// Opens the store backed by an explicit file path.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            slots,
            path: Some(path),
        }
    }

    /// A store that never touches disk. Session-scoped only.
    pub fn in_memory() -> Self {
        Self {
            slots: Slots::default(),
            path: None,
        }
    }

    /// Reads a slot.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.0.get(key).map(String::as_str)
    }

    /// Writes a slot and persists the store. The in-memory value is always
    /// updated; a failed disk write is reported on stderr and otherwise
    /// swallowed, so a disabled or broken storage backend degrades to
    /// session-only persistence.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.0.insert(key.into(), value.into());
        if let Some(path) = self.path.clone() {
            if let Err(e) = self.save_to_path(&path) {
                eprintln!("Failed to persist preferences: {}", e);
            }
        }
    }

    fn save_to_path(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.slots)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn default_prefs_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join(PREFS_FILE));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PREFS_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_and_reopen_round_trips_slots() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(PREFS_FILE);

        let mut store = PrefStore::open_at(&path);
        store.set(LANG_PREF_KEY, "zh_CN");

        let reopened = PrefStore::open_at(&path);
        assert_eq!(reopened.get(LANG_PREF_KEY), Some("zh_CN"));
    }

    #[test]
    fn open_at_tolerates_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(PREFS_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let store = PrefStore::open_at(&path);
        assert_eq!(store.get(LANG_PREF_KEY), None);
    }

    #[test]
    fn open_at_missing_file_is_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = PrefStore::open_at(temp_dir.path().join("absent.toml"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn set_with_unavailable_directory_keeps_session_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("failed to write blocker file");

        // The parent path is a regular file, so persisting must fail; the
        // slot still updates for the session and the caller sees no error.
        let mut store = PrefStore::open_at(blocker.join("sub").join(PREFS_FILE));
        store.set(LANG_PREF_KEY, "zh_CN");
        assert_eq!(store.get(LANG_PREF_KEY), Some("zh_CN"));
    }

    #[test]
    fn in_memory_store_keeps_session_values() {
        let mut store = PrefStore::in_memory();
        store.set(LANG_PREF_KEY, "fr");
        assert_eq!(store.get(LANG_PREF_KEY), Some("fr"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = PrefStore::in_memory();
        store.set(LANG_PREF_KEY, "fr");
        store.set(LANG_PREF_KEY, "de");
        assert_eq!(store.get(LANG_PREF_KEY), Some("de"));
    }
}
