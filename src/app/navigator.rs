//! Hierarchy navigator.
//!
//! Owns the store and its collaborators:
//! - turns widget interactions into actions
//! - executes the effects the store returns
//! - drains server responses posted by the runtime

use crate::kernel::services::adapters::{AppMessage, NavRuntime};
use crate::kernel::services::ports::{Frontend, HierarchyApi, NavigatorConfig};
use crate::kernel::services::EventBus;
use crate::kernel::{Action, AppState, ContextAction, Store};
use crate::models::NodeId;
use crate::views::HierarchyView;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

mod bridge;
mod tick;

/// Upper bound on runtime messages handled per `pump`.
const MAX_MESSAGES_PER_PUMP: usize = 64;

pub struct HierarchyNavigator {
    store: Store,
    runtime: NavRuntime,
    rx: Receiver<AppMessage>,
    bus: Box<dyn EventBus>,
    frontend: Box<dyn Frontend>,
    view: Box<dyn HierarchyView>,
    /// Requests handed to the runtime whose reply has not been applied yet.
    in_flight: usize,
}

impl HierarchyNavigator {
    pub fn new(
        config: NavigatorConfig,
        api: Arc<dyn HierarchyApi>,
        bus: Box<dyn EventBus>,
        frontend: Box<dyn Frontend>,
        view: Box<dyn HierarchyView>,
    ) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = NavRuntime::new(api, tx)?;
        Ok(Self {
            store: Store::new(AppState::new(config)),
            runtime,
            rx,
            bus,
            frontend,
            view,
            in_flight: 0,
        })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn is_loading(&self) -> bool {
        self.store.state().load.is_loading()
    }

    /// Server requests still awaiting a reply, superseded loads included.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Fetches the hierarchy rooted at `root_path`; earlier in-flight loads
    /// are superseded.
    pub fn update(&mut self, root_path: impl Into<String>) -> bool {
        self.dispatch(Action::Load {
            root_path: root_path.into(),
        })
    }

    pub fn reload(&mut self) -> bool {
        self.dispatch(Action::Reload)
    }

    pub fn descend(&mut self, node: NodeId) -> bool {
        self.dispatch(Action::Descend { node })
    }

    pub fn selector_changed(&mut self, index: usize) -> bool {
        self.dispatch(Action::SelectorChanged { index })
    }

    pub fn select(&mut self, node: NodeId, additive: bool) -> bool {
        self.dispatch(Action::Select { node, additive })
    }

    pub fn context_action(&mut self, node: NodeId, action: ContextAction) -> bool {
        self.dispatch(Action::ContextAction { node, action })
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.dispatch(Action::DismissError)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/navigator.rs"]
mod tests;
