use super::message::AppMessage;
use crate::kernel::services::ports::{ApiError, HierarchyApi};
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs server requests off the UI thread and posts their outcome back.
pub struct NavRuntime {
    runtime: tokio::runtime::Runtime,
    api: Arc<dyn HierarchyApi>,
    tx: Sender<AppMessage>,
}

impl NavRuntime {
    pub fn new(api: Arc<dyn HierarchyApi>, tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, api, tx })
    }

    pub fn fetch_hierarchy(&self, generation: u64, root_path: String, include_graphs: bool) {
        let tx = self.tx.clone();
        let request = self.api.get_hierarchy(&root_path, include_graphs);
        self.runtime.spawn(async move {
            let result = request.await;
            log_failure("fetch", &root_path, &result);
            let _ = tx.send(AppMessage::HierarchyFetched { generation, result });
        });
    }

    pub fn delete_hierarchy(&self, path: String) {
        let tx = self.tx.clone();
        let request = self.api.delete_hierarchy(&path);
        self.runtime.spawn(async move {
            let result = request.await;
            log_failure("delete", &path, &result);
            let _ = tx.send(AppMessage::HierarchyDeleted { path, result });
        });
    }

    pub fn export_kappa(&self, path: String, names: Vec<String>) {
        let tx = self.tx.clone();
        let request = self.api.get_kappa(&path, &names);
        self.runtime.spawn(async move {
            let result = request.await;
            log_failure("export", &path, &result);
            let _ = tx.send(AppMessage::KappaExported { path, result });
        });
    }
}

fn log_failure<T>(op: &'static str, path: &str, result: &Result<T, ApiError>) {
    match result {
        Ok(_) => {}
        Err(ApiError::Transport { detail }) => {
            tracing::warn!(op, path, detail = %detail, "server unreachable");
        }
        Err(e) => tracing::warn!(op, path, error = %e, "server request failed"),
    }
}
