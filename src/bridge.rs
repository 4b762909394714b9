// SPDX-License-Identifier: MPL-2.0
//! Host-application message bridge.
//!
//! The hosting application delivers inbound events (login info, recent
//! files, ...) through a single `HandleStudio` entry point. The payloads
//! are opaque to the panel core; the only contract the core upholds is
//! that panel initialization never replaces an installed handler.

use std::fmt;

/// An inbound host → panel event. The payload schema is the host's
/// business; the core only routes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioEvent {
    pub name: String,
    pub payload: String,
}

impl StudioEvent {
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

type StudioHandler = Box<dyn FnMut(&StudioEvent)>;

/// Delivery point for host events.
#[derive(Default)]
pub struct HostBridge {
    handler: Option<StudioHandler>,
}

impl HostBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the `HandleStudio` handler, replacing any previous one.
    pub fn set_handle_studio(&mut self, handler: impl FnMut(&StudioEvent) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Delivers an event to the installed handler. Returns whether a
    /// handler was there to receive it.
    pub fn handle_studio(&mut self, event: &StudioEvent) -> bool {
        match self.handler.as_mut() {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBridge")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
