//! regraph server client over HTTP.

use crate::kernel::services::ports::{ApiError, ApiFuture, HierarchyApi, KappaExport};
use std::time::Duration;

const HIERARCHY_LOC: &str = "/hierarchy";
const KAPPA_LOC: &str = "/graph/get_kappa";

pub struct HttpHierarchyApi {
    client: reqwest::Client,
    server_url: String,
}

impl HttpHierarchyApi {
    pub fn new(server_url: impl Into<String>, timeout: Duration) -> Self {
        let client = match build_client(timeout) {
            Ok(client) => client,
            Err(error) => {
                tracing::error!(
                    %error,
                    "Failed to build HTTP client, falling back to defaults without timeout"
                );
                reqwest::Client::new()
            }
        };
        Self {
            client,
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn hierarchy_url(&self, path: &str, include_graphs: bool) -> String {
        request_url(
            &self.server_url,
            HIERARCHY_LOC,
            path,
            &[
                ("include_graphs", if include_graphs { "true" } else { "false" }),
                ("rules", "false"),
            ],
        )
    }

    pub fn delete_url(&self, path: &str) -> String {
        request_url(&self.server_url, HIERARCHY_LOC, path, &[])
    }

    pub fn kappa_url(&self, path: &str) -> String {
        format!("{}{}{}", self.server_url, KAPPA_LOC, path)
    }
}

fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("hierarchy-nav/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// `{server}{loc}{path}` plus a trailing slash for non-root paths, then the query.
pub fn request_url(server: &str, loc: &str, path: &str, params: &[(&str, &str)]) -> String {
    let slash = if !path.is_empty() && path != "/" { "/" } else { "" };
    let mut url = format!("{server}{loc}{path}{slash}");
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport {
        detail: err.to_string(),
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let text = resp.text().await.map_err(transport)?;
    serde_json::from_str(&text).map_err(|e| ApiError::Payload(e.to_string()))
}

impl HierarchyApi for HttpHierarchyApi {
    fn get_hierarchy(&self, path: &str, include_graphs: bool) -> ApiFuture<serde_json::Value> {
        let client = self.client.clone();
        let url = self.hierarchy_url(path, include_graphs);
        Box::pin(async move {
            tracing::debug!(url = %url, "GET hierarchy");
            let resp = client
                .get(&url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await
                .map_err(transport)?;
            read_json::<serde_json::Value>(check_status(resp).await?).await
        })
    }

    fn delete_hierarchy(&self, path: &str) -> ApiFuture<()> {
        let client = self.client.clone();
        let url = self.delete_url(path);
        Box::pin(async move {
            tracing::debug!(url = %url, "DELETE hierarchy");
            let resp = client.delete(&url).send().await.map_err(transport)?;
            check_status(resp).await?;
            Ok::<(), ApiError>(())
        })
    }

    fn get_kappa(&self, path: &str, names: &[String]) -> ApiFuture<KappaExport> {
        let client = self.client.clone();
        let url = self.kappa_url(path);
        let body = serde_json::json!({ "names": names });
        Box::pin(async move {
            tracing::debug!(url = %url, "POST get_kappa");
            let resp = client
                .post(&url)
                .header("X-Requested-With", "XMLHttpRequest")
                .json(&body)
                .send()
                .await
                .map_err(transport)?;
            read_json::<KappaExport>(check_status(resp).await?).await
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/http.rs"]
mod tests;
