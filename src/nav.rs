// SPDX-License-Identifier: MPL-2.0
//! Menu/board navigation state machine.
//!
//! The machine owns the logical selection state and never touches markup
//! directly: every transition returns a [`RenderPlan`] of explicit
//! [`RenderOp`]s that a projection step (see [`crate::dom::apply_plan`])
//! applies to a [`crate::dom::PanelDom`]. This keeps the single source of
//! truth out of the DOM and makes transitions testable without one.
//!
//! Two modes exist, matching the two observed panel variants:
//!
//! - **Single-tier**: one flat menu, each entry bound 1:1 to a board.
//! - **Two-tier**: a Primary (menu-like) and a Secondary (tab-like) tier
//!   sharing one board set; selecting in one tier clears the other tier's
//!   highlight.
//!
//! Entries are either `Standard` or `Exempt`. An exempt entry (the user
//! guide link in the observed markup) does not participate in the ordinary
//! highlight class: selecting it skips the bulk per-tier highlight clears
//! and the hide-all board sweep, clearing only the currently highlighted
//! marker and swapping in its own board. This carve-out is intentional and
//! must stay an explicit case, not be folded into the standard rule.

use std::fmt;

/// Identifier shared by a menu entry and the board it is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(String);

impl MenuId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Hierarchy level of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Secondary,
}

/// Whether an entry follows the standard highlight/board rules or the
/// exempt carve-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    Standard,
    Exempt,
}

/// A clickable navigation element, fixed at panel load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: MenuId,
    pub tier: Tier,
    pub kind: EntryKind,
}

impl MenuEntry {
    pub fn primary(id: impl Into<MenuId>) -> Self {
        Self {
            id: id.into(),
            tier: Tier::Primary,
            kind: EntryKind::Standard,
        }
    }

    pub fn secondary(id: impl Into<MenuId>) -> Self {
        Self {
            id: id.into(),
            tier: Tier::Secondary,
            kind: EntryKind::Standard,
        }
    }

    /// A primary-tier entry with the exempt carve-out.
    pub fn exempt(id: impl Into<MenuId>) -> Self {
        Self {
            id: id.into(),
            tier: Tier::Primary,
            kind: EntryKind::Exempt,
        }
    }
}

/// Which of the two tier layouts the panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    SingleTier,
    TwoTier,
}

/// The two observed variants of board clearing on a standard select:
/// unconditional hide-all, or only when a different board was showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardReset {
    #[default]
    Always,
    OnChange,
}

/// Fixed navigation configuration, owned by the panel for its lifetime.
#[derive(Debug, Clone)]
pub struct NavConfig {
    pub mode: NavMode,
    pub board_reset: BoardReset,
    pub entries: Vec<MenuEntry>,
    pub boards: Vec<MenuId>,
    /// Entry auto-selected right after panel load, if any.
    pub default_entry: Option<MenuId>,
}

impl NavConfig {
    pub fn entry(&self, id: &MenuId) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn has_board(&self, id: &MenuId) -> bool {
        self.boards.contains(id)
    }
}

/// Logical selection state. At most one selection across both fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub primary: Option<MenuId>,
    pub secondary: Option<MenuId>,
    /// Board currently projected visible. `None` only before the first
    /// select or after selecting an entry with no bound board.
    pub visible_board: Option<MenuId>,
}

/// A single DOM projection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Strip the highlight class from every entry of a tier.
    ClearHighlights(Tier),
    /// Strip the highlight class from whichever entry currently carries it.
    ClearActiveHighlight,
    Highlight(MenuId),
    HideAllBoards,
    HideBoard(MenuId),
    ShowBoard(MenuId),
}

/// Ordered projection steps for one transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub ops: Vec<RenderOp>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// The navigation state machine.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavConfig,
    state: NavState,
}

impl Navigator {
    /// Starts with nothing selected and no board shown; the first `select`
    /// (typically for the configured default entry) establishes the
    /// one-board-visible invariant.
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            state: NavState::default(),
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Runs one transition. An id with no matching entry returns an empty
    /// plan and leaves the state untouched (valid ids are a caller
    /// invariant; see the markup validation in [`crate::panel`]).
    pub fn select(&mut self, id: &MenuId) -> RenderPlan {
        let Some(entry) = self.config.entry(id).cloned() else {
            return RenderPlan::default();
        };

        match (self.config.mode, entry.kind) {
            (NavMode::TwoTier, EntryKind::Exempt) => self.select_exempt(&entry),
            (NavMode::SingleTier, _) => self.select_single_tier(&entry),
            (NavMode::TwoTier, EntryKind::Standard) => self.select_standard(&entry),
        }
    }

    fn select_single_tier(&mut self, entry: &MenuEntry) -> RenderPlan {
        let mut ops = vec![RenderOp::ClearActiveHighlight];
        self.push_board_reset(&entry.id, &mut ops);
        ops.push(RenderOp::Highlight(entry.id.clone()));
        self.finish_selection(entry, ops)
    }

    fn select_standard(&mut self, entry: &MenuEntry) -> RenderPlan {
        let mut ops = vec![
            RenderOp::ClearHighlights(Tier::Secondary),
            RenderOp::ClearHighlights(Tier::Primary),
        ];
        self.push_board_reset(&entry.id, &mut ops);
        ops.push(RenderOp::Highlight(entry.id.clone()));
        self.finish_selection(entry, ops)
    }

    /// The carve-out: no bulk per-tier clears, no hide-all sweep, no
    /// ordinary highlight on the entry itself. Only the current marker is
    /// cleared and the previously visible board is swapped for this one.
    fn select_exempt(&mut self, entry: &MenuEntry) -> RenderPlan {
        let mut ops = vec![RenderOp::ClearActiveHighlight];

        let bound = self.config.has_board(&entry.id);
        if let Some(prev) = self.state.visible_board.clone() {
            if prev != entry.id {
                ops.push(RenderOp::HideBoard(prev));
            }
        }
        if bound {
            ops.push(RenderOp::ShowBoard(entry.id.clone()));
        }

        self.state.primary = Some(entry.id.clone());
        self.state.secondary = None;
        self.state.visible_board = bound.then(|| entry.id.clone());
        RenderPlan { ops }
    }

    /// Emits the board hide/show pair for a standard select, honoring the
    /// configured [`BoardReset`] variant.
    fn push_board_reset(&self, id: &MenuId, ops: &mut Vec<RenderOp>) {
        let already_visible = self.state.visible_board.as_ref() == Some(id);
        if self.config.board_reset == BoardReset::OnChange && already_visible {
            return;
        }
        ops.push(RenderOp::HideAllBoards);
        if self.config.has_board(id) {
            ops.push(RenderOp::ShowBoard(id.clone()));
        }
    }

    fn finish_selection(&mut self, entry: &MenuEntry, ops: Vec<RenderOp>) -> RenderPlan {
        match entry.tier {
            Tier::Primary => {
                self.state.primary = Some(entry.id.clone());
                self.state.secondary = None;
            }
            Tier::Secondary => {
                self.state.secondary = Some(entry.id.clone());
                self.state.primary = None;
            }
        }
        self.state.visible_board = self.config.has_board(&entry.id).then(|| entry.id.clone());
        RenderPlan { ops }
    }
}
