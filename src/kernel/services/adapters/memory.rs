//! In-process hierarchy server, used offline (`--snapshot`) and by tests.

use crate::kernel::services::ports::{ApiError, ApiFuture, HierarchyApi, KappaExport};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MemoryServer {
    hierarchy: Option<Value>,
    fail_next: Option<ApiError>,
    deleted: Vec<String>,
    exports: Vec<(String, Vec<String>)>,
    fetches: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MemoryHierarchyApi {
    inner: Arc<Mutex<MemoryServer>>,
}

impl MemoryHierarchyApi {
    pub fn new(hierarchy: Value) -> Self {
        let api = Self::default();
        api.set_hierarchy(hierarchy);
        api
    }

    pub fn set_hierarchy(&self, hierarchy: Value) {
        if let Ok(mut server) = self.inner.lock() {
            server.hierarchy = Some(hierarchy);
        }
    }

    /// Makes the next request of any kind fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        if let Ok(mut server) = self.inner.lock() {
            server.fail_next = Some(err);
        }
    }

    pub fn deleted(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|s| s.deleted.clone())
            .unwrap_or_default()
    }

    pub fn exports(&self) -> Vec<(String, Vec<String>)> {
        self.inner
            .lock()
            .map(|s| s.exports.clone())
            .unwrap_or_default()
    }

    pub fn fetches(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|s| s.fetches.clone())
            .unwrap_or_default()
    }

    fn with_server<T>(
        &self,
        f: impl FnOnce(&mut MemoryServer) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut server = self.inner.lock().map_err(|_| ApiError::Transport {
            detail: "memory server poisoned".to_string(),
        })?;
        if let Some(err) = server.fail_next.take() {
            return Err(err);
        }
        f(&mut server)
    }
}

fn not_found(path: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        status_text: "Not Found".to_string(),
        body: format!("no hierarchy at {path}"),
    }
}

/// Removes the node named by `path` from a snapshot value.
fn prune(hierarchy: &mut Value, path: &str) -> bool {
    let root_name = hierarchy
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if root_name != "/" && segments.first() == Some(&root_name.as_str()) {
        segments.remove(0);
    }
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut node = hierarchy;
    for segment in parents {
        let Some(next) = node
            .get_mut("children")
            .and_then(Value::as_array_mut)
            .and_then(|children| {
                children
                    .iter_mut()
                    .find(|c| c.get("name").and_then(Value::as_str) == Some(*segment))
            })
        else {
            return false;
        };
        node = next;
    }

    let Some(children) = node.get_mut("children").and_then(Value::as_array_mut) else {
        return false;
    };
    let before = children.len();
    children.retain(|c| c.get("name").and_then(Value::as_str) != Some(*last));
    children.len() != before
}

impl HierarchyApi for MemoryHierarchyApi {
    fn get_hierarchy(&self, path: &str, _include_graphs: bool) -> ApiFuture<Value> {
        let result = self.with_server(|server| {
            server.fetches.push(path.to_string());
            server.hierarchy.clone().ok_or_else(|| not_found(path))
        });
        Box::pin(async move { result })
    }

    fn delete_hierarchy(&self, path: &str) -> ApiFuture<()> {
        let result = self.with_server(|server| {
            let removed = server
                .hierarchy
                .as_mut()
                .map(|h| prune(h, path))
                .unwrap_or(false);
            if !removed {
                return Err(not_found(path));
            }
            server.deleted.push(path.to_string());
            Ok(())
        });
        Box::pin(async move { result })
    }

    fn get_kappa(&self, path: &str, names: &[String]) -> ApiFuture<KappaExport> {
        let result = self.with_server(|server| {
            server.exports.push((path.to_string(), names.to_vec()));
            let mut kappa_code = format!("// {path}\n");
            for name in names {
                kappa_code.push_str(&format!("// nugget {name}\n"));
            }
            Ok(KappaExport { kappa_code })
        });
        Box::pin(async move { result })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory.rs"]
mod tests;
