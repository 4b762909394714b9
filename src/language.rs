// SPDX-License-Identifier: MPL-2.0
//! Language resolution for the panel session.
//!
//! The resolver runs once at panel load (and again only on an explicit
//! override action), checking sources in strict priority order:
//!
//! 1. An explicit override from the page's `lang=<code>` query parameter
//! 2. The persisted preference slot
//! 3. The default language, `en`
//!
//! An override is persisted verbatim *before* it is validated against the
//! catalog: an unrecognized code becomes the stored preference for future
//! sessions while rendering silently falls back to the default for the
//! current pass. That asymmetry is deliberate: a host may ship the
//! matching catalog table in a later release.

use crate::catalog::{Catalog, DEFAULT_LANG};
use crate::prefs::{PrefStore, LANG_PREF_KEY};

/// Resolves the language code to render with.
///
/// `query_override` is the raw value of the `lang` query parameter, if the
/// page was loaded with one. Writes to `prefs` only in the override case.
pub fn resolve(query_override: Option<&str>, prefs: &mut PrefStore, catalog: &Catalog) -> String {
    let candidate = match query_override {
        Some(code) => {
            // Write-through before validation; see module docs.
            prefs.set(LANG_PREF_KEY, code);
            Some(code.to_string())
        }
        None => prefs.get(LANG_PREF_KEY).map(str::to_string),
    };

    match candidate {
        Some(code) if catalog.contains_language(&code) => code,
        _ => DEFAULT_LANG.to_string(),
    }
}

/// Extracts a parameter from a raw query string (`"a=1&lang=fr"`, with or
/// without a leading `?`). First occurrence wins; an empty value counts as
/// absent.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some(name) {
            match parts.next() {
                Some(value) if !value.is_empty() => return Some(value.to_string()),
                _ => return None,
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn catalog_with(langs: &[&str]) -> Catalog {
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), HashMap::new());
        for lang in langs {
            tables.insert(lang.to_string(), HashMap::new());
        }
        Catalog::from_tables(tables).expect("catalog should build")
    }

    #[test]
    fn override_wins_and_is_persisted() {
        let catalog = catalog_with(&["fr"]);
        let mut prefs = PrefStore::in_memory();
        prefs.set(LANG_PREF_KEY, "de");

        let lang = resolve(Some("fr"), &mut prefs, &catalog);
        assert_eq!(lang, "fr");
        assert_eq!(prefs.get(LANG_PREF_KEY), Some("fr"));
    }

    #[test]
    fn unrecognized_override_persists_verbatim_but_renders_default() {
        let catalog = catalog_with(&[]);
        let mut prefs = PrefStore::in_memory();

        let lang = resolve(Some("zh_CN"), &mut prefs, &catalog);
        assert_eq!(lang, "en");
        assert_eq!(prefs.get(LANG_PREF_KEY), Some("zh_CN"));
    }

    #[test]
    fn persisted_preference_used_without_override() {
        let catalog = catalog_with(&["ja"]);
        let mut prefs = PrefStore::in_memory();
        prefs.set(LANG_PREF_KEY, "ja");

        assert_eq!(resolve(None, &mut prefs, &catalog), "ja");
    }

    #[test]
    fn stale_persisted_preference_falls_back_without_being_rewritten() {
        let catalog = catalog_with(&[]);
        let mut prefs = PrefStore::in_memory();
        prefs.set(LANG_PREF_KEY, "xx");

        assert_eq!(resolve(None, &mut prefs, &catalog), "en");
        // Fallback is render-only; the stored preference is untouched.
        assert_eq!(prefs.get(LANG_PREF_KEY), Some("xx"));
    }

    #[test]
    fn no_sources_yields_default() {
        let catalog = catalog_with(&[]);
        let mut prefs = PrefStore::in_memory();
        assert_eq!(resolve(None, &mut prefs, &catalog), "en");
        assert_eq!(prefs.get(LANG_PREF_KEY), None);
    }

    #[test]
    fn query_param_basic_extraction() {
        assert_eq!(query_param("?lang=fr", "lang"), Some("fr".to_string()));
        assert_eq!(
            query_param("theme=dark&lang=zh_CN", "lang"),
            Some("zh_CN".to_string())
        );
    }

    #[test]
    fn query_param_absent_or_empty_is_none() {
        assert_eq!(query_param("theme=dark", "lang"), None);
        assert_eq!(query_param("?lang=", "lang"), None);
        assert_eq!(query_param("", "lang"), None);
    }

    #[test]
    fn query_param_first_occurrence_wins() {
        assert_eq!(
            query_param("lang=fr&lang=de", "lang"),
            Some("fr".to_string())
        );
    }
}
