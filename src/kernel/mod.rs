//! Headless navigation core (state/action/effect).

pub mod action;
pub mod effect;
pub mod error;
pub mod event;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, ContextAction};
pub use effect::Effect;
pub use error::{NavError, ValidationError};
pub use event::HierarchyEvent;
pub use state::{AppState, LoadState, NavigationState};
pub use store::{DispatchResult, Store};
