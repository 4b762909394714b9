// SPDX-License-Identifier: MPL-2.0
//! Panel orchestration: wires the catalog, resolver, text applier, and
//! navigation machine together around one DOM instance.
//!
//! Everything the panel needs (catalog, navigation configuration, host
//! bridge, the page's query string, and the preference store) is passed in
//! explicitly at [`GuidePanel::open`], so multiple independent panels can
//! coexist and tests stay deterministic. Load order follows the page
//! lifecycle: resolve language, substitute text, auto-select the default
//! menu entry. The resolver is not re-invoked afterwards except through
//! [`GuidePanel::set_language`].

use crate::bridge::HostBridge;
use crate::catalog::{Catalog, DEFAULT_LANG};
use crate::dom::{self, PanelDom};
use crate::error::{Error, Result};
use crate::language;
use crate::nav::{MenuId, NavConfig, NavState, Navigator};
use crate::prefs::PrefStore;
use crate::text;

pub struct GuidePanel<D: PanelDom> {
    dom: D,
    catalog: Catalog,
    nav: Navigator,
    language: String,
    bridge: HostBridge,
}

impl<D: PanelDom> GuidePanel<D> {
    /// Opens the panel: resolves the language from the page query and the
    /// preference store, applies translations, and selects the configured
    /// default entry. The bridge is stored as given: a handler installed
    /// by the host before open survives initialization untouched.
    pub fn open(
        mut dom: D,
        catalog: Catalog,
        nav_config: NavConfig,
        bridge: HostBridge,
        query: &str,
        prefs: &mut PrefStore,
    ) -> Self {
        let query_override = language::query_param(query, "lang");
        let language = language::resolve(query_override.as_deref(), prefs, &catalog);
        text::apply_translations(&mut dom, &catalog, &language);

        let mut nav = Navigator::new(nav_config);
        if let Some(default) = nav.config().default_entry.clone() {
            let plan = nav.select(&default);
            dom::apply_plan(&mut dom, &plan);
        }

        Self {
            dom,
            catalog,
            nav,
            language,
            bridge,
        }
    }

    /// Runs one menu selection and projects it onto the DOM.
    pub fn select(&mut self, id: &MenuId) {
        let plan = self.nav.select(id);
        dom::apply_plan(&mut self.dom, &plan);
    }

    /// Explicit language override: the one post-load path back into the
    /// resolver. Persists `code` verbatim and re-renders, falling back to
    /// the default language when `code` has no catalog table.
    pub fn set_language(&mut self, code: &str, prefs: &mut PrefStore) {
        self.language = language::resolve(Some(code), prefs, &self.catalog);
        text::apply_translations(&mut self.dom, &self.catalog, &self.language);
    }

    /// Language the panel currently renders with.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn nav_state(&self) -> &NavState {
        self.nav.state()
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn bridge(&self) -> &HostBridge {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut HostBridge {
        &mut self.bridge
    }

    /// Static markup checks, meant for tests and debug builds rather than
    /// runtime handling: every keyed translatable node must be covered by
    /// the default language table, and every menu entry must have a bound
    /// board.
    pub fn validate(&self) -> Result<()> {
        let mut defects = Vec::new();

        for (_, key) in self.dom.translatable_nodes() {
            if let Some(key) = key {
                if self.catalog.lookup(DEFAULT_LANG, &key).is_none() {
                    defects.push(format!("key '{}' missing from '{}' table", key, DEFAULT_LANG));
                }
            }
        }

        for entry in &self.nav.config().entries {
            if !self.nav.config().has_board(&entry.id) {
                defects.push(format!("menu entry '{}' has no bound board", entry.id));
            }
        }

        if defects.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(defects.join("; ")))
        }
    }
}
