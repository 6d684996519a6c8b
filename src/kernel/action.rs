use crate::kernel::services::ports::{ApiError, KappaExport};
use crate::models::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Delete,
    Export,
}

impl ContextAction {
    pub const ALL: [ContextAction; 2] = [ContextAction::Delete, ContextAction::Export];

    pub fn label(self) -> &'static str {
        match self {
            ContextAction::Delete => "delete",
            ContextAction::Export => "get kappa",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Load {
        root_path: String,
    },
    Reload,
    Descend {
        node: NodeId,
    },
    SelectorChanged {
        index: usize,
    },
    Select {
        node: NodeId,
        additive: bool,
    },
    ContextAction {
        node: NodeId,
        action: ContextAction,
    },
    DeleteConfirmed {
        path: String,
    },
    DismissError,
    HierarchyFetched {
        generation: u64,
        result: Result<serde_json::Value, ApiError>,
    },
    HierarchyDeleted {
        path: String,
        result: Result<(), ApiError>,
    },
    KappaExported {
        path: String,
        result: Result<KappaExport, ApiError>,
    },
}
