use crate::kernel::{Action, AppState, ContextAction};
use crate::models::NodeId;
use crate::views::display_label;

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuEntry {
    pub label: &'static str,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub node: NodeId,
    pub label: String,
    /// Full node name, for tooltips.
    pub title: String,
    /// The tab holding the single selection.
    pub current: bool,
    /// Member of the multi-selection.
    pub selected: bool,
    /// Whether double-clicking descends.
    pub navigable: bool,
}

impl TabItem {
    pub fn on_click(&self, additive: bool) -> Action {
        Action::Select {
            node: self.node,
            additive,
        }
    }

    pub fn on_double_click(&self) -> Action {
        Action::Descend { node: self.node }
    }

    pub fn context_menu(&self) -> Vec<ContextMenuEntry> {
        ContextAction::ALL
            .iter()
            .map(|&action| ContextMenuEntry {
                label: action.label(),
                action: Action::ContextAction {
                    node: self.node,
                    action,
                },
            })
            .collect()
    }
}

/// One tab per child of the current node, in snapshot order.
pub fn render_children_tabs(state: &AppState) -> Vec<TabItem> {
    let tree = &state.tree;
    state
        .current_children()
        .iter()
        .map(|&node| {
            let name = tree.name(node).unwrap_or_default();
            TabItem {
                node,
                label: display_label(name, &state.config.labels).into_owned(),
                title: name.to_string(),
                current: state.nav.is_current(node),
                selected: state.nav.is_marked(node),
                navigable: tree.is_navigable(node),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/views/children_tabs.rs"]
mod tests;
