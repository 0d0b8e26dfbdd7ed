//! Per-operation parameter structs.
//!
//! Every field is optional or defaulted; a missing or wrong-typed key is a
//! documented fallback in the matching handler, never a decode failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Row-selector form; checked before the column/operator form.
    pub condition: Option<String>,
    pub column: Option<String>,
    pub op: Option<String>,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateParams {
    pub group_by: Option<String>,
    pub agg_column: Option<String>,
    /// One of mean/sum/max/min; anything else falls back to mean.
    pub agg_func: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortParams {
    pub by: Option<String>,
    pub ascending: bool,
}

impl Default for SortParams {
    fn default() -> Self {
        Self {
            by: None,
            ascending: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeParams {
    /// Column subset; absent means all columns.
    pub columns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizeParams {
    /// Chart kind ("bar" or "line"); anything else falls back to bar.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorParams {
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sort_defaults_to_ascending() {
        let p: SortParams = serde_json::from_value(json!({ "by": "score" })).unwrap();
        assert!(p.ascending);
        assert_eq!(p.by.as_deref(), Some("score"));
    }

    #[test]
    fn filter_value_accepts_any_json() {
        let p: FilterParams =
            serde_json::from_value(json!({ "column": "score", "op": ">", "value": 85 })).unwrap();
        assert_eq!(p.value, Some(json!(85)));

        let p: FilterParams =
            serde_json::from_value(json!({ "column": "name", "op": "==", "value": "Ada" }))
                .unwrap();
        assert_eq!(p.value, Some(json!("Ada")));
    }

    #[test]
    fn visualize_kind_uses_wire_name_type() {
        let p: VisualizeParams =
            serde_json::from_value(json!({ "type": "line", "x": "a", "y": "b" })).unwrap();
        assert_eq!(p.kind.as_deref(), Some("line"));
    }

    #[test]
    fn empty_params_decode_to_defaults() {
        let p: AggregateParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, AggregateParams::default());
    }
}
