use super::{Action, AppState, Effect, NavError, ValidationError};
use crate::models::NodeId;

mod navigation;
mod server;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Load { .. }
            | Action::Reload
            | Action::HierarchyFetched { .. }
            | Action::HierarchyDeleted { .. }
            | Action::KappaExported { .. } => self.reduce_server_action(action),
            Action::Descend { .. }
            | Action::SelectorChanged { .. }
            | Action::Select { .. }
            | Action::ContextAction { .. }
            | Action::DeleteConfirmed { .. }
            | Action::DismissError => self.reduce_navigation_action(action),
        }
    }

    /// Validation failures are dropped with a debug trace; anything else is
    /// recorded and reported to the host.
    fn reject(&mut self, action: &'static str, error: NavError) -> DispatchResult {
        if !error.is_user_facing() {
            tracing::debug!(action, %error, "interaction ignored");
            return DispatchResult::unchanged();
        }
        tracing::warn!(action, %error, "hierarchy operation failed");
        let message = error.to_string();
        self.state.error = Some(error);
        DispatchResult {
            effects: vec![Effect::ReportError(message)],
            state_changed: true,
        }
    }

    fn ensure_interactive(&self) -> Result<NodeId, ValidationError> {
        if self.state.error.is_some() {
            return Err(ValidationError::Blocked);
        }
        self.state.nav.current_node.ok_or(ValidationError::NotLoaded)
    }

    /// Checks that `node` is a child of the current node in the live snapshot.
    fn ensure_child_of_current(&self, node: NodeId) -> Result<NodeId, ValidationError> {
        let current = self.ensure_interactive()?;
        if !self.state.tree.contains(node) {
            return Err(ValidationError::StaleNode);
        }
        if !self.state.tree.is_child_of(node, current) {
            return Err(ValidationError::OutsideScope);
        }
        Ok(current)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
