//! Contract of the hierarchy server client.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'static>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{status} : {status_text}\n{body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    /// No HTTP status is available (connection refused, timeout, ...).
    #[error("Unexpected Server Error")]
    Transport { detail: String },
    #[error("unexpected response payload: {0}")]
    Payload(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KappaExport {
    pub kappa_code: String,
}

pub trait HierarchyApi: Send + Sync {
    /// Fetches the hierarchy rooted at `path` as a raw JSON snapshot.
    fn get_hierarchy(&self, path: &str, include_graphs: bool) -> ApiFuture<serde_json::Value>;

    /// Deletes the node at `path` and all its descendants.
    fn delete_hierarchy(&self, path: &str) -> ApiFuture<()>;

    /// Asks the server to generate kappa code for the named nuggets under `path`.
    fn get_kappa(&self, path: &str, names: &[String]) -> ApiFuture<KappaExport>;
}
