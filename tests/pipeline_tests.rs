//! CSV-in, result-out pipeline tests: read a file, decode a plan document,
//! execute, inspect the serialized result.

use std::fs;
use std::io::Write;

use serde_json::json;

use tabex_exec::Executor;
use tabex_plan::Plan;

fn write_csv(dir: &std::path::Path, name: &str, rows: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).expect("create csv");
    writeln!(file, "id,class,score").expect("write header");
    for i in 0..rows {
        let class = if i % 3 == 0 { "A" } else { "B" };
        writeln!(file, "{},{},{}", i, class, 50 + (i % 50)).expect("write row");
    }
    path
}

#[test]
fn csv_filter_sort_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(dir.path(), "input.csv", 30);
    let table = tabex_io::read_csv_path(&csv).unwrap();
    assert_eq!(table.num_rows(), 30);

    let plan = Plan::from_json(
        r#"{"steps": [
            {"operation": "filter", "params": {"column": "score", "op": ">=", "value": 70}},
            {"operation": "sort", "params": {"by": "score", "ascending": false}}
        ]}"#,
    )
    .unwrap();

    let executor = Executor::with_output_dir(dir.path().join("charts"));
    let result = executor.execute(&table, &plan);
    assert!(result.error.is_none());
    assert!(!result.rows.is_empty());
    let scores: Vec<i64> = result
        .rows
        .iter()
        .map(|r| r["score"].as_i64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|&s| s >= 70));
}

#[test]
fn csv_aggregate_visualize_pipeline_writes_chart() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(dir.path(), "input.csv", 12);
    let table = tabex_io::read_csv_path(&csv).unwrap();

    let plan = Plan::from_json(
        r#"{"steps": [
            {"operation": "aggregate", "params": {"group_by": "class", "agg_column": "score", "agg_func": "max"}},
            {"operation": "visualize", "params": {"type": "bar", "x": "class", "y": "score"}}
        ]}"#,
    )
    .unwrap();

    let charts = dir.path().join("charts");
    let executor = Executor::with_output_dir(&charts);
    let result = executor.execute(&table, &plan);
    assert!(result.error.is_none());
    assert_eq!(result.rows.len(), 2);

    let chart = result.chart.expect("chart rendered");
    let svg = fs::read_to_string(&chart).expect("chart file readable");
    assert!(svg.starts_with("<svg"));
    assert!(chart.starts_with(charts.to_string_lossy().as_ref()));
}

#[test]
fn serialized_result_uses_wire_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(dir.path(), "input.csv", 5);
    let table = tabex_io::read_csv_path(&csv).unwrap();

    let executor = Executor::with_output_dir(dir.path());
    let result = executor.execute(&table, &Plan::default());
    let v = serde_json::to_value(&result).unwrap();
    assert_eq!(v["data_preview"].as_array().unwrap().len(), 5);
    assert_eq!(v["data_preview"][0]["id"], json!(0));
    assert!(v.get("chart_path").is_none());
    assert!(v.get("error").is_none());
}

#[test]
fn yaml_plan_runs_like_json() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(dir.path(), "input.csv", 10);
    let table = tabex_io::read_csv_path(&csv).unwrap();

    let plan = Plan::from_yaml(
        "steps:\n  - operation: filter\n    params:\n      column: class\n      op: \"==\"\n      value: A\n",
    )
    .unwrap();
    let executor = Executor::with_output_dir(dir.path());
    let result = executor.execute(&table, &plan);
    assert!(result
        .rows
        .iter()
        .all(|r| r["class"] == json!("A")));
}
