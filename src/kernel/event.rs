use serde::Serialize;

/// Notifications published on the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HierarchyEvent {
    /// A graph became the active tab.
    GraphSelected { path: String },
    /// Context of the active tab, for components that mirror the tab strip.
    TabContext {
        path: String,
        sibling_names: Vec<String>,
        parent_path: String,
        source: String,
    },
    /// The server-side hierarchy was mutated and dependent views should reload.
    HierarchyChanged,
}

impl HierarchyEvent {
    pub const GRAPH_SELECTED: &'static str = "graph-selected";
    pub const TAB_CONTEXT: &'static str = "tab-context";
    pub const HIERARCHY_CHANGED: &'static str = "hierarchy-changed";

    pub fn name(&self) -> &'static str {
        match self {
            HierarchyEvent::GraphSelected { .. } => Self::GRAPH_SELECTED,
            HierarchyEvent::TabContext { .. } => Self::TAB_CONTEXT,
            HierarchyEvent::HierarchyChanged => Self::HIERARCHY_CHANGED,
        }
    }
}
