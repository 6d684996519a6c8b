//! View layer.
//!
//! Pure projections of `AppState` into the two widgets the host draws:
//! - ancestor selector (breadcrumb of the current node)
//! - children tabs (one tab per child of the current node)

pub mod ancestor_selector;
pub mod children_tabs;
pub mod label;

pub use ancestor_selector::{render_ancestor_selector, SelectorOption};
pub use children_tabs::{render_children_tabs, ContextMenuEntry, TabItem};
pub use label::display_label;

/// Drawing surface supplied by the host.
///
/// Each call replaces the previous content of that widget entirely.
pub trait HierarchyView {
    fn render_selector(&mut self, options: Vec<SelectorOption>);
    fn render_tabs(&mut self, tabs: Vec<TabItem>);
}
