use crate::kernel::HierarchyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchHierarchy {
        generation: u64,
        root_path: String,
        include_graphs: bool,
    },
    ConfirmDelete {
        path: String,
        prompt: String,
    },
    DeleteHierarchy {
        path: String,
    },
    ExportKappa {
        path: String,
        names: Vec<String>,
    },
    Download {
        file_name: String,
        content: String,
    },
    Publish(HierarchyEvent),
    ReportError(String),
    RenderSelector,
    RenderTabs,
}
