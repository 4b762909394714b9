// SPDX-License-Identifier: MPL-2.0
//! The seam between the panel core and whatever renders it.
//!
//! [`PanelDom`] captures the handful of markup operations the core
//! performs: enumerate translatable nodes, replace node content, toggle
//! highlight classes, and toggle board visibility. [`MemoryDom`] is a
//! plain in-memory implementation; hosts that drive a real webview diff
//! against it or translate [`RenderOp`]s into script calls, and tests use
//! it directly.

use crate::nav::{MenuId, RenderOp, RenderPlan, Tier};
use std::collections::{HashMap, HashSet};

/// Opaque node handle, stable for the lifetime of the panel.
pub type NodeId = usize;

/// Markup operations consumed and produced by the panel core.
pub trait PanelDom {
    /// Every node carrying the translatable marker, with its key
    /// attribute (`None` when the marker is present but the key is not).
    fn translatable_nodes(&self) -> Vec<(NodeId, Option<String>)>;

    /// Replaces a node's rendered content.
    fn set_content(&mut self, node: NodeId, content: &str);

    /// Strips the highlight class from every entry of `tier`.
    fn clear_tier_highlights(&mut self, tier: Tier);

    /// Strips the highlight class from whichever entry currently carries it.
    fn clear_active_highlight(&mut self);

    /// Puts the highlight class on one entry.
    fn set_highlight(&mut self, id: &MenuId);

    fn hide_all_boards(&mut self);
    fn hide_board(&mut self, id: &MenuId);
    fn show_board(&mut self, id: &MenuId);
}

/// Projects one transition's plan onto a DOM. Pure rendering; all policy
/// lives in the [`crate::nav::Navigator`] that produced the plan.
pub fn apply_plan<D: PanelDom + ?Sized>(dom: &mut D, plan: &RenderPlan) {
    for op in &plan.ops {
        match op {
            RenderOp::ClearHighlights(tier) => dom.clear_tier_highlights(*tier),
            RenderOp::ClearActiveHighlight => dom.clear_active_highlight(),
            RenderOp::Highlight(id) => dom.set_highlight(id),
            RenderOp::HideAllBoards => dom.hide_all_boards(),
            RenderOp::HideBoard(id) => dom.hide_board(id),
            RenderOp::ShowBoard(id) => dom.show_board(id),
        }
    }
}

#[derive(Debug, Clone)]
struct MemoryNode {
    translatable: bool,
    key: Option<String>,
    content: String,
}

/// In-memory panel markup: text nodes, menu entries with their tier, and
/// boards with a visibility flag.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    nodes: Vec<MemoryNode>,
    entry_tiers: HashMap<MenuId, Tier>,
    highlighted: HashSet<MenuId>,
    boards: HashSet<MenuId>,
    visible: HashSet<MenuId>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node carrying the translatable marker and a key attribute.
    pub fn add_translatable(&mut self, key: &str, initial: &str) -> NodeId {
        self.push_node(MemoryNode {
            translatable: true,
            key: Some(key.to_string()),
            content: initial.to_string(),
        })
    }

    /// Adds a node with the translatable marker but no key attribute.
    pub fn add_unkeyed_translatable(&mut self, initial: &str) -> NodeId {
        self.push_node(MemoryNode {
            translatable: true,
            key: None,
            content: initial.to_string(),
        })
    }

    /// Adds a plain node the applier must never touch.
    pub fn add_static(&mut self, content: &str) -> NodeId {
        self.push_node(MemoryNode {
            translatable: false,
            key: None,
            content: content.to_string(),
        })
    }

    fn push_node(&mut self, node: MemoryNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Registers a menu entry node and its tier classification.
    pub fn add_menu_entry(&mut self, id: impl Into<MenuId>, tier: Tier) {
        self.entry_tiers.insert(id.into(), tier);
    }

    /// Registers a board node, initially hidden.
    pub fn add_board(&mut self, id: impl Into<MenuId>) {
        self.boards.insert(id.into());
    }

    pub fn content(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.content.as_str())
    }

    pub fn is_board_visible(&self, id: &MenuId) -> bool {
        self.visible.contains(id)
    }

    /// Boards currently visible, sorted for stable assertions.
    pub fn visible_boards(&self) -> Vec<MenuId> {
        let mut boards: Vec<MenuId> = self.visible.iter().cloned().collect();
        boards.sort();
        boards
    }

    /// Entries currently carrying the highlight class, sorted.
    pub fn highlighted_entries(&self) -> Vec<MenuId> {
        let mut entries: Vec<MenuId> = self.highlighted.iter().cloned().collect();
        entries.sort();
        entries
    }
}

impl PanelDom for MemoryDom {
    fn translatable_nodes(&self) -> Vec<(NodeId, Option<String>)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.translatable)
            .map(|(i, n)| (i, n.key.clone()))
            .collect()
    }

    fn set_content(&mut self, node: NodeId, content: &str) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.content = content.to_string();
        }
    }

    fn clear_tier_highlights(&mut self, tier: Tier) {
        let tiers = &self.entry_tiers;
        self.highlighted
            .retain(|id| tiers.get(id) != Some(&tier));
    }

    fn clear_active_highlight(&mut self) {
        self.highlighted.clear();
    }

    fn set_highlight(&mut self, id: &MenuId) {
        self.highlighted.insert(id.clone());
    }

    fn hide_all_boards(&mut self) {
        self.visible.clear();
    }

    fn hide_board(&mut self, id: &MenuId) {
        self.visible.remove(id);
    }

    fn show_board(&mut self, id: &MenuId) {
        if self.boards.contains(id) {
            self.visible.insert(id.clone());
        }
    }
}
