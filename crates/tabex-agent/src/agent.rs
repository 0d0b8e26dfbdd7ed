//! End-to-end analyze: query -> plan (via a provider) -> executed result.

use serde::Serialize;

use tabex_core::types::Table;
use tabex_exec::{ExecutionResult, Executor};
use tabex_plan::Plan;

use crate::prompt::build_prompt;
use crate::provider::Provider;
use crate::Result;

/// Fixed reason attached to the synthetic error step when the model's reply
/// is not a JSON plan document.
pub const INVALID_PLAN_REASON: &str = "LLM did not respond with valid JSON.";

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub plan: Plan,
    pub result: ExecutionResult,
}

/// Ask `provider` for a plan answering `query` over `table`, then execute it.
///
/// A reply that is not valid JSON becomes a plan with a single synthetic
/// error step, which the executor surfaces as a result-level error; provider
/// transport failures are the only `Err` path.
pub async fn analyze(
    provider: &dyn Provider,
    executor: &Executor,
    table: &Table,
    query: &str,
) -> Result<Analysis> {
    let prompt = build_prompt(table, query);
    let raw = provider.complete(&prompt).await?;
    let plan = Plan::from_json_lossy(strip_code_fences(&raw), INVALID_PLAN_REASON);
    tracing::debug!(steps = plan.len(), "plan decoded");
    let result = executor.execute(table, &plan);
    Ok(Analysis { plan, result })
}

/// Models often wrap JSON in a markdown fence despite instructions.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    match inner.strip_suffix("```") {
        Some(body) => body.trim(),
        None => trimmed,
    }
}
