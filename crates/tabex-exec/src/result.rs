//! Execution result: row preview, optional chart reference, optional error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Row previews are capped to bound response payload size.
pub const PREVIEW_ROWS: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Row-record preview of the final working table, at most
    /// [`PREVIEW_ROWS`] entries.
    #[serde(rename = "data_preview", default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Map<String, Value>>,

    /// Reference to the chart artifact from the last `visualize` step, if
    /// any rendered.
    #[serde(rename = "chart_path", default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResult {
    /// Terminal error result; any chart produced earlier in the run is
    /// discarded.
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            chart: None,
            error: Some(reason.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
