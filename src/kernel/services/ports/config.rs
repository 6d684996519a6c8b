use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_TAG: &str = "hierarchy";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    #[serde(alias = "serverUrl")]
    pub server_url: String,
    #[serde(alias = "sourceTag")]
    pub source_tag: String,
    #[serde(alias = "includeGraphs")]
    pub include_graphs: bool,
    #[serde(alias = "requestTimeoutMs")]
    pub request_timeout_ms: u64,
    #[serde(alias = "exportFileName")]
    pub export_file_name: String,
    pub labels: LabelConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
            include_graphs: false,
            request_timeout_ms: 30_000,
            export_file_name: "model.ka".to_string(),
            labels: LabelConfig::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}

/// How node names are shortened for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    #[serde(alias = "maxChars")]
    pub max_chars: usize,
    #[serde(alias = "keepChars")]
    pub keep_chars: usize,
    pub ellipsis: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            max_chars: 14,
            keep_chars: 12,
            ellipsis: "...".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
