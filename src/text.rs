// SPDX-License-Identifier: MPL-2.0
//! Text substitution over translatable nodes.

use crate::catalog::Catalog;
use crate::dom::PanelDom;

/// Rewrites every keyed translatable node from the `lang` table.
///
/// Nodes whose key is absent from the active language keep their existing
/// content; there is no cross-language fallback and nothing is logged.
/// Substitutions are independent of each other, so the call is idempotent
/// and safe to repeat with a different language after an override.
pub fn apply_translations<D: PanelDom + ?Sized>(dom: &mut D, catalog: &Catalog, lang: &str) {
    for (node, key) in dom.translatable_nodes() {
        let Some(key) = key else { continue };
        if let Some(text) = catalog.lookup(lang, &key) {
            dom.set_content(node, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use std::collections::HashMap;

    fn catalog() -> Catalog {
        let mut tables = HashMap::new();
        let mut en = HashMap::new();
        en.insert("t1".to_string(), "Welcome".to_string());
        en.insert("t2".to_string(), "First Print".to_string());
        let mut fr = HashMap::new();
        fr.insert("t1".to_string(), "Bienvenue".to_string());
        tables.insert("en".to_string(), en);
        tables.insert("fr".to_string(), fr);
        Catalog::from_tables(tables).expect("catalog should build")
    }

    #[test]
    fn replaces_content_for_known_keys() {
        let mut dom = MemoryDom::new();
        let t1 = dom.add_translatable("t1", "placeholder");
        apply_translations(&mut dom, &catalog(), "en");
        assert_eq!(dom.content(t1), Some("Welcome"));
    }

    #[test]
    fn missing_key_leaves_node_untouched() {
        let mut dom = MemoryDom::new();
        // "t2" exists in en but not fr; no fallback substitution.
        let t2 = dom.add_translatable("t2", "original");
        apply_translations(&mut dom, &catalog(), "fr");
        assert_eq!(dom.content(t2), Some("original"));
    }

    #[test]
    fn unknown_language_touches_nothing() {
        let mut dom = MemoryDom::new();
        let t1 = dom.add_translatable("t1", "original");
        apply_translations(&mut dom, &catalog(), "xx");
        assert_eq!(dom.content(t1), Some("original"));
    }

    #[test]
    fn unkeyed_and_static_nodes_are_ignored() {
        let mut dom = MemoryDom::new();
        let unkeyed = dom.add_unkeyed_translatable("as-is");
        let fixed = dom.add_static("fixed");
        apply_translations(&mut dom, &catalog(), "en");
        assert_eq!(dom.content(unkeyed), Some("as-is"));
        assert_eq!(dom.content(fixed), Some("fixed"));
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let mut once = MemoryDom::new();
        let a = once.add_translatable("t1", "placeholder");
        apply_translations(&mut once, &catalog(), "en");

        let mut twice = once.clone();
        apply_translations(&mut twice, &catalog(), "en");
        assert_eq!(once.content(a), twice.content(a));
    }

    #[test]
    fn reapplying_with_new_language_switches_text() {
        let mut dom = MemoryDom::new();
        let t1 = dom.add_translatable("t1", "placeholder");
        apply_translations(&mut dom, &catalog(), "en");
        apply_translations(&mut dom, &catalog(), "fr");
        assert_eq!(dom.content(t1), Some("Bienvenue"));
    }
}
