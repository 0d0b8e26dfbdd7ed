//! Planner prompt construction.

use tabex_core::types::Table;

const COLUMNS_PLACEHOLDER: &str = "<<COLUMNS>>";

/// Instruction template for the plan generator. The executor tolerates
/// partially-wrong plans, but a tight prompt keeps the no-op rate down.
pub const PLANNER_PROMPT: &str = r#"You are a data analysis planner.

Given a tabular dataset and a natural-language query, produce a JSON plan
that deterministic code will execute step by step.

Only use columns from this schema:
<<COLUMNS>>

Allowed operations:
- "filter": keep rows matching a simple comparison (>, <, ==, >=, <=).
- "aggregate": group by one column and reduce another (mean, sum, max, min).
- "sort": order rows by one column.
- "describe": summary statistics for one or more columns.
- "visualize": a simple "bar" or "line" chart of previous results.

The plan must be a JSON object of this shape:

{
  "steps": [
    { "operation": "filter" | "aggregate" | "sort" | "describe" | "visualize",
      "params": { "...": "..." } }
  ]
}

Example — "Show me the average score per class and plot a bar chart.":

{
  "steps": [
    { "operation": "aggregate",
      "params": { "group_by": "class", "agg_column": "score", "agg_func": "mean" } },
    { "operation": "visualize",
      "params": { "type": "bar", "x": "class", "y": "score" } }
  ]
}

Constraints:
- Never invent column names; use only the schema above.
- If the query cannot be answered with these columns, return a single step:
  { "operation": "error", "params": { "reason": "..." } }
- Reply with valid JSON only. No prose, no explanation."#;

/// Render the schema into the template and append the query.
pub fn build_prompt(table: &Table, query: &str) -> String {
    let schema = table
        .schema()
        .fields
        .iter()
        .map(|f| format!("- {}: {}", f.name, f.data_type))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = PLANNER_PROMPT.replace(COLUMNS_PLACEHOLDER, &schema);
    prompt.push_str(&format!("\n\nUser query: {query}\nPlan:"));
    prompt
}
