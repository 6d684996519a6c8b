use crate::kernel::{Action, AppState};
use crate::models::NodeId;
use crate::views::display_label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub node: NodeId,
    /// Position in the root-to-current path.
    pub index: usize,
    pub label: String,
    /// Full node name, for tooltips.
    pub title: String,
    pub active: bool,
}

impl SelectorOption {
    /// Action to dispatch when this option is picked.
    pub fn on_change(&self) -> Action {
        Action::SelectorChanged { index: self.index }
    }
}

/// One option per node from the root to the current node; the last is active.
pub fn render_ancestor_selector(state: &AppState) -> Vec<SelectorOption> {
    let Some(current) = state.nav.current_node else {
        return Vec::new();
    };
    let tree = &state.tree;
    tree.tree_path(current)
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            let name = tree.name(node).unwrap_or_default();
            SelectorOption {
                node,
                index,
                label: display_label(name, &state.config.labels).into_owned(),
                title: name.to_string(),
                active: node == current,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/views/ancestor_selector.rs"]
mod tests;
