use crate::kernel::services::ports::{ApiError, KappaExport};
use crate::kernel::Action;

pub enum AppMessage {
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

impl From<AppMessage> for Action {
    fn from(msg: AppMessage) -> Self {
        match msg {
            AppMessage::HierarchyFetched { generation, result } => {
                Action::HierarchyFetched { generation, result }
            }
            AppMessage::HierarchyDeleted { path, result } => {
                Action::HierarchyDeleted { path, result }
            }
            AppMessage::KappaExported { path, result } => Action::KappaExported { path, result },
        }
    }
}
