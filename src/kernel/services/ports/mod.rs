//! Service ports: traits + data contracts.

pub mod api;
pub mod config;
pub mod frontend;

pub use api::{ApiError, ApiFuture, HierarchyApi, KappaExport};
pub use config::{LabelConfig, NavigatorConfig, DEFAULT_SOURCE_TAG};
pub use frontend::Frontend;
