use rustc_hash::FxHashSet;

use crate::kernel::services::ports::NavigatorConfig;
use crate::kernel::NavError;
use crate::models::{HierarchyTree, NodeId};

/// Where the user stands in the hierarchy.
///
/// `selected_node` and every member of `selection_set` are children of
/// `current_node`; moving `current_node` clears both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_node: Option<NodeId>,
    pub selected_node: Option<NodeId>,
    pub selection_set: FxHashSet<NodeId>,
}

impl NavigationState {
    pub fn reset_to(&mut self, node: NodeId) {
        self.current_node = Some(node);
        self.selected_node = None;
        self.selection_set.clear();
    }

    pub fn is_current(&self, node: NodeId) -> bool {
        self.selected_node == Some(node)
    }

    pub fn is_marked(&self, node: NodeId) -> bool {
        self.selection_set.contains(&node)
    }

    /// Flips `node` in the selection set; returns whether it is now marked.
    pub fn toggle_marked(&mut self, node: NodeId) -> bool {
        if self.selection_set.remove(&node) {
            false
        } else {
            self.selection_set.insert(node);
            true
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    /// Generation of the most recent load request.
    pub generation: u64,
    /// Set while the latest request has not resolved.
    pub pending: Option<u64>,
    pub root_path: Option<String>,
}

impl LoadState {
    pub fn begin(&mut self, root_path: String) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        self.root_path = Some(root_path);
        self.generation
    }

    pub fn is_latest(&self, generation: u64) -> bool {
        self.pending == Some(generation)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug)]
pub struct AppState {
    pub tree: HierarchyTree,
    pub nav: NavigationState,
    pub load: LoadState,
    pub error: Option<NavError>,
    pub config: NavigatorConfig,
}

impl AppState {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            tree: HierarchyTree::new(),
            nav: NavigationState::default(),
            load: LoadState::default(),
            error: None,
            config,
        }
    }

    /// Children of the current node, in display order.
    pub fn current_children(&self) -> &[NodeId] {
        self.nav
            .current_node
            .map(|node| self.tree.sons(node))
            .unwrap_or(&[])
    }

    /// Names of the marked children, in display order.
    pub fn marked_names(&self) -> Vec<String> {
        self.current_children()
            .iter()
            .copied()
            .filter(|&node| self.nav.is_marked(node))
            .filter_map(|node| self.tree.name(node).map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
