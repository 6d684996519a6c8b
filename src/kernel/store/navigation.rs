use crate::kernel::{Action, ContextAction, Effect, HierarchyEvent, ValidationError};
use crate::models::NodeId;

impl super::Store {
    pub(super) fn reduce_navigation_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Descend { node } => self.descend(node),
            Action::SelectorChanged { index } => {
                let current = match self.ensure_interactive() {
                    Ok(current) => current,
                    Err(reason) => return self.reject("selector", reason.into()),
                };
                match self.state.tree.tree_path(current).get(index).copied() {
                    Some(node) => self.descend(node),
                    None => self.reject("selector", ValidationError::OutsideScope.into()),
                }
            }
            Action::Select { node, additive } => self.select(node, additive),
            Action::ContextAction { node, action } => self.context_action(node, action),
            Action::DeleteConfirmed { path } => {
                if let Err(reason) = self.ensure_interactive() {
                    return self.reject("delete", reason.into());
                }
                tracing::info!(path = %path, "deleting hierarchy");
                super::DispatchResult {
                    effects: vec![Effect::DeleteHierarchy { path }],
                    state_changed: false,
                }
            }
            Action::DismissError => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.error.take().is_some(),
            },
            _ => unreachable!("non-navigation action passed to reduce_navigation_action"),
        }
    }

    /// Moves to `node`, which must be a navigable tab of the current node or
    /// one of its breadcrumb ancestors.
    fn descend(&mut self, node: NodeId) -> super::DispatchResult {
        let current = match self.ensure_interactive() {
            Ok(current) => current,
            Err(reason) => return self.reject("descend", reason.into()),
        };
        let tree = &self.state.tree;
        if !tree.contains(node) {
            return self.reject("descend", ValidationError::StaleNode.into());
        }
        if !tree.is_child_of(node, current) && !tree.tree_path(current).contains(&node) {
            return self.reject("descend", ValidationError::OutsideScope.into());
        }
        if !tree.is_navigable(node) {
            return self.reject("descend", ValidationError::Leaf.into());
        }
        if node == current {
            return super::DispatchResult::unchanged();
        }

        self.state.nav.reset_to(node);
        super::DispatchResult {
            effects: vec![Effect::RenderSelector, Effect::RenderTabs],
            state_changed: true,
        }
    }

    fn select(&mut self, node: NodeId, additive: bool) -> super::DispatchResult {
        let current = match self.ensure_child_of_current(node) {
            Ok(current) => current,
            Err(reason) => return self.reject("select", reason.into()),
        };

        if additive {
            self.state.nav.toggle_marked(node);
            return super::DispatchResult {
                effects: vec![Effect::RenderTabs],
                state_changed: true,
            };
        }

        if self.state.nav.selected_node == Some(node) {
            return super::DispatchResult::unchanged();
        }
        self.state.nav.selected_node = Some(node);

        let tree = &self.state.tree;
        let path = tree.abs_path(node).unwrap_or_default();
        let parent_path = tree.abs_path(current).unwrap_or_default();
        let sibling_names = tree.names_of(tree.sons(current));

        super::DispatchResult {
            effects: vec![
                Effect::RenderTabs,
                Effect::Publish(HierarchyEvent::GraphSelected { path: path.clone() }),
                Effect::Publish(HierarchyEvent::TabContext {
                    path,
                    sibling_names,
                    parent_path,
                    source: self.state.config.source_tag.clone(),
                }),
            ],
            state_changed: true,
        }
    }

    fn context_action(&mut self, node: NodeId, action: ContextAction) -> super::DispatchResult {
        let current = match self.ensure_child_of_current(node) {
            Ok(current) => current,
            Err(reason) => return self.reject(action.label(), reason.into()),
        };

        match action {
            ContextAction::Delete => {
                let path = self.state.tree.abs_path(node).unwrap_or_default();
                let prompt = format!("Confirmation : remove {path} and all its children ?");
                super::DispatchResult {
                    effects: vec![Effect::ConfirmDelete { path, prompt }],
                    state_changed: false,
                }
            }
            ContextAction::Export => {
                let path = export_path(&self.state.tree.abs_path(current).unwrap_or_default());
                let names = self.state.marked_names();
                tracing::info!(path = %path, count = names.len(), "exporting kappa");
                super::DispatchResult {
                    effects: vec![Effect::ExportKappa { path, names }],
                    state_changed: false,
                }
            }
        }
    }
}

/// Directory form of a node path as the export endpoint expects it.
pub(crate) fn export_path(abs_path: &str) -> String {
    let path = format!("{abs_path}/");
    if path == "//" {
        "/".to_string()
    } else {
        path
    }
}
