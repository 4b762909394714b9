// SPDX-License-Identifier: MPL-2.0
//! `studio_guide` is the core of a localized onboarding/guide panel for
//! desktop applications that embed a webview.
//!
//! It resolves the active display language, substitutes translated strings
//! into marked nodes, and manages mutually-exclusive visibility of content
//! boards driven by one- or two-tier menu selections. The DOM itself is an
//! external collaborator behind the [`dom::PanelDom`] seam, so the whole
//! core is testable without a browser.

#![doc(html_root_url = "https://docs.rs/studio_guide/0.3.0")]

pub mod bridge;
pub mod catalog;
pub mod dom;
pub mod error;
pub mod language;
pub mod nav;
pub mod panel;
pub mod prefs;
pub mod text;
