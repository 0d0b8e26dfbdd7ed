//! Step executor: applies a plan to a table, left to right.
//!
//! The executor never fails for malformed plan content. Handlers absorb
//! invalid parameters as no-ops; an `error` step or an unsupported operation
//! name turns into an error field on the result and stops the run.

use tracing::{debug, warn};
use uuid::Uuid;

use tabex_chart::{ArtifactStore, ChartKind};
use tabex_core::types::Table;
use tabex_ops::{aggregate, describe, filter, sort};
use tabex_plan::params::VisualizeParams;
use tabex_plan::{Plan, Step};

use crate::result::{ExecutionResult, PREVIEW_ROWS};

#[derive(Debug, Clone, Default)]
pub struct Executor {
    artifacts: ArtifactStore,
}

impl Executor {
    pub fn new(artifacts: ArtifactStore) -> Self {
        Self { artifacts }
    }

    pub fn with_output_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(ArtifactStore::new(dir))
    }

    /// Execute `plan` against a copy of `table`.
    ///
    /// The caller's table is never mutated; each step replaces the working
    /// table wholesale. An empty plan returns the preview of the input.
    pub fn execute(&self, table: &Table, plan: &Plan) -> ExecutionResult {
        let run_id = Uuid::new_v4();
        let mut current = table.clone();
        let mut chart: Option<String> = None;

        for (idx, step) in plan.steps.iter().enumerate() {
            debug!(
                %run_id,
                step = idx,
                operation = step.operation_name(),
                rows = current.num_rows(),
                "executing step"
            );
            match step {
                Step::Filter(p) => current = filter::apply(&current, p),
                Step::Aggregate(p) => current = aggregate::apply(&current, p),
                Step::Sort(p) => current = sort::apply(&current, p),
                Step::Describe(p) => current = describe::apply(&current, p),
                // Visualize reads the current table but never replaces it;
                // a later visualize step overwrites the chart slot.
                Step::Visualize(p) => chart = self.visualize(&current, p),
                Step::Error(p) => {
                    let reason = p
                        .reason
                        .clone()
                        .unwrap_or_else(|| "Unknown error".to_string());
                    debug!(%run_id, %reason, "plan carried an error step");
                    return ExecutionResult::error(reason);
                }
                Step::Unsupported { operation } => {
                    return ExecutionResult::error(format!("Unsupported operation: {operation}"));
                }
            }
        }

        ExecutionResult {
            rows: current.records(PREVIEW_ROWS),
            chart,
            error: None,
        }
    }

    fn visualize(&self, table: &Table, params: &VisualizeParams) -> Option<String> {
        let (Some(x), Some(y)) = (params.x.as_deref(), params.y.as_deref()) else {
            return None;
        };
        let kind = ChartKind::parse(params.kind.as_deref());
        let svg = tabex_chart::render(table, x, y, kind)?;
        match self.artifacts.save_svg(&svg) {
            Ok(path) => Some(path.to_string_lossy().into_owned()),
            Err(e) => {
                // A chart that cannot be persisted degrades to "no chart",
                // consistent with invalid axis columns.
                warn!(error = %e, "failed to persist chart artifact");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabex_core::types::{Column, Scalar};
    use tabex_plan::params::{ErrorParams, FilterParams, SortParams};

    fn scores() -> Table {
        Table::new(vec![Column::new(
            "score",
            vec![Scalar::I64(80), Scalar::I64(90), Scalar::I64(70)],
        )])
    }

    fn executor() -> (Executor, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (Executor::with_output_dir(dir.path()), dir)
    }

    #[test]
    fn empty_plan_previews_input_unchanged() {
        let (exec, _dir) = executor();
        let result = exec.execute(&scores(), &Plan::default());
        assert_eq!(result.rows.len(), 3);
        assert!(result.chart.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn error_step_without_reason_uses_default() {
        let (exec, _dir) = executor();
        let plan = Plan::new(vec![Step::Error(ErrorParams::default())]);
        let result = exec.execute(&scores(), &plan);
        assert_eq!(result.error.as_deref(), Some("Unknown error"));
    }

    #[test]
    fn unsupported_operation_names_the_offender() {
        let (exec, _dir) = executor();
        let plan = Plan::new(vec![Step::Unsupported {
            operation: "transform".into(),
        }]);
        let result = exec.execute(&scores(), &plan);
        assert_eq!(
            result.error.as_deref(),
            Some("Unsupported operation: transform")
        );
    }

    #[test]
    fn caller_table_is_not_mutated() {
        let (exec, _dir) = executor();
        let table = scores();
        let plan = Plan::new(vec![Step::Sort(SortParams {
            by: Some("score".into()),
            ascending: false,
        })]);
        let _ = exec.execute(&table, &plan);
        assert_eq!(table, scores());
    }

    #[test]
    fn error_step_discards_earlier_chart() {
        let (exec, _dir) = executor();
        let plan = Plan::new(vec![
            Step::Visualize(VisualizeParams {
                kind: Some("bar".into()),
                x: Some("score".into()),
                y: Some("score".into()),
            }),
            Step::Error(ErrorParams {
                reason: Some("late failure".into()),
            }),
        ]);
        let result = exec.execute(&scores(), &plan);
        assert_eq!(result.error.as_deref(), Some("late failure"));
        assert!(result.chart.is_none());
    }

    #[test]
    fn filter_then_preview() {
        let (exec, _dir) = executor();
        let plan = Plan::new(vec![Step::Filter(FilterParams {
            column: Some("score".into()),
            op: Some(">".into()),
            value: Some(serde_json::json!(85)),
            ..Default::default()
        })]);
        let result = exec.execute(&scores(), &plan);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0]["score"], serde_json::json!(90));
    }
}
