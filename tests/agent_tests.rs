//! Agent boundary tests with the mock provider: plan decode tolerance and
//! end-to-end analyze.

use serde_json::json;

use tabex_agent::{analyze, MockProvider, INVALID_PLAN_REASON};
use tabex_core::types::{Column, Scalar, Table};
use tabex_exec::Executor;

fn classes() -> Table {
    Table::new(vec![
        Column::new(
            "class",
            vec![
                Scalar::Str("A".into()),
                Scalar::Str("A".into()),
                Scalar::Str("B".into()),
            ],
        ),
        Column::new(
            "score",
            vec![Scalar::I64(80), Scalar::I64(90), Scalar::I64(70)],
        ),
    ])
}

#[tokio::test]
async fn analyze_runs_model_plan_and_echoes_it() {
    let provider = MockProvider::with_response(
        r#"{"steps": [
            {"operation": "aggregate", "params": {"group_by": "class", "agg_column": "score", "agg_func": "mean"}}
        ]}"#,
    );
    let dir = tempfile::tempdir().unwrap();
    let executor = Executor::with_output_dir(dir.path());

    let analysis = analyze(&provider, &executor, &classes(), "average score per class")
        .await
        .unwrap();
    assert_eq!(analysis.plan.len(), 1);
    assert_eq!(analysis.result.rows[0]["score"], json!(85.0));

    // The response document carries both the echoed plan and the result.
    let v = serde_json::to_value(&analysis).unwrap();
    assert_eq!(v["plan"]["steps"][0]["operation"], json!("aggregate"));
    assert_eq!(v["result"]["data_preview"][1]["class"], json!("B"));
}

#[tokio::test]
async fn fenced_reply_still_decodes() {
    let provider = MockProvider::with_response(
        "```json\n{\"steps\": [{\"operation\": \"sort\", \"params\": {\"by\": \"score\"}}]}\n```",
    );
    let dir = tempfile::tempdir().unwrap();
    let executor = Executor::with_output_dir(dir.path());

    let analysis = analyze(&provider, &executor, &classes(), "sort it").await.unwrap();
    assert!(analysis.result.error.is_none());
    assert_eq!(analysis.result.rows[0]["score"], json!(70));
}

#[tokio::test]
async fn non_json_reply_surfaces_fixed_error() {
    let provider = MockProvider::with_response("Sorry, I can only discuss the weather.");
    let dir = tempfile::tempdir().unwrap();
    let executor = Executor::with_output_dir(dir.path());

    let analysis = analyze(&provider, &executor, &classes(), "q").await.unwrap();
    assert_eq!(analysis.result.error.as_deref(), Some(INVALID_PLAN_REASON));
    assert!(analysis.result.rows.is_empty());
}

#[tokio::test]
async fn model_declared_error_step_passes_through() {
    let provider = MockProvider::with_response(
        r#"{"steps": [{"operation": "error", "params": {"reason": "no such column: height"}}]}"#,
    );
    let dir = tempfile::tempdir().unwrap();
    let executor = Executor::with_output_dir(dir.path());

    let analysis = analyze(&provider, &executor, &classes(), "average height").await.unwrap();
    assert_eq!(
        analysis.result.error.as_deref(),
        Some("no such column: height")
    );
}
