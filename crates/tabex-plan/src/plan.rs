//! Plan and step types plus their wire codec.
//!
//! The wire shape is `{ "steps": [ { "operation": <name>, "params": {..} } ] }`.
//! Steps decode through a raw form so an unrecognized operation name becomes
//! `Step::Unsupported` instead of failing the document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use tabex_core::error::Result;

use crate::params::{
    AggregateParams, DescribeParams, ErrorParams, FilterParams, SortParams, VisualizeParams,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Filter(FilterParams),
    Aggregate(AggregateParams),
    Sort(SortParams),
    Describe(DescribeParams),
    Visualize(VisualizeParams),
    Error(ErrorParams),
    Unsupported { operation: String },
}

impl Step {
    /// Stable operation name, as it appears on the wire.
    pub fn operation_name(&self) -> &str {
        match self {
            Step::Filter(_) => "filter",
            Step::Aggregate(_) => "aggregate",
            Step::Sort(_) => "sort",
            Step::Describe(_) => "describe",
            Step::Visualize(_) => "visualize",
            Step::Error(_) => "error",
            Step::Unsupported { operation } => operation,
        }
    }
}

/// Wire form of a step. `params` is whatever the generator produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawStep {
    operation: String,
    #[serde(default)]
    params: Value,
}

/// Wrong-typed params collapse to the variant's defaults, which every
/// handler treats as a no-op.
fn decode_params<T: DeserializeOwned + Default>(params: Value) -> T {
    serde_json::from_value(params).unwrap_or_default()
}

impl From<RawStep> for Step {
    fn from(raw: RawStep) -> Self {
        match raw.operation.as_str() {
            "filter" => Step::Filter(decode_params(raw.params)),
            "aggregate" => Step::Aggregate(decode_params(raw.params)),
            "sort" => Step::Sort(decode_params(raw.params)),
            "describe" => Step::Describe(decode_params(raw.params)),
            "visualize" => Step::Visualize(decode_params(raw.params)),
            "error" => Step::Error(decode_params(raw.params)),
            _ => Step::Unsupported {
                operation: raw.operation,
            },
        }
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        let params = match self {
            Step::Filter(p) => serde_json::to_value(p),
            Step::Aggregate(p) => serde_json::to_value(p),
            Step::Sort(p) => serde_json::to_value(p),
            Step::Describe(p) => serde_json::to_value(p),
            Step::Visualize(p) => serde_json::to_value(p),
            Step::Error(p) => serde_json::to_value(p),
            Step::Unsupported { .. } => Ok(Value::Object(Default::default())),
        }
        .map_err(S::Error::custom)?;

        RawStep {
            operation: self.operation_name().to_string(),
            params,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawStep::deserialize(deserializer).map(Step::from)
    }
}

/// An ordered sequence of steps. Empty is valid and leaves the input table
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Plan {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// A single synthetic `error` step, used at boundaries when the upstream
    /// generator did not return a usable plan document.
    pub fn error(reason: impl Into<String>) -> Self {
        Plan::new(vec![Step::Error(ErrorParams {
            reason: Some(reason.into()),
        })])
    }

    pub fn from_json(src: &str) -> Result<Plan> {
        Ok(serde_json::from_str(src)?)
    }

    /// Decode a JSON plan document; a malformed document becomes a synthetic
    /// error plan rather than a decode failure.
    pub fn from_json_lossy(src: &str, fallback_reason: &str) -> Plan {
        serde_json::from_str(src).unwrap_or_else(|_| Plan::error(fallback_reason))
    }

    pub fn from_yaml(src: &str) -> std::result::Result<Plan, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }
}
