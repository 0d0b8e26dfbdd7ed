//! Filter handler.
//!
//! Two mutually exclusive usage forms:
//! 1. row selector: `{ "condition": "row_index == 0" }`
//! 2. column comparison: `{ "column": "score", "op": ">", "value": 90 }`
//!
//! The row-selector form is checked first. Only the first-row literal is
//! recognized; any other selector string passes the table through untouched
//! (placeholder for future predicates, not an error).

use serde_json::Value;

use tabex_core::types::{Scalar, Table};
use tabex_plan::params::FilterParams;

const FIRST_ROW_CONDITION: &str = "row_index == 0";

const COMPARISON_OPS: [&str; 5] = [">", "<", "==", ">=", "<="];

pub fn apply(table: &Table, params: &FilterParams) -> Table {
    if let Some(condition) = &params.condition {
        if condition == FIRST_ROW_CONDITION {
            return table.head(1);
        }
        return table.clone();
    }

    let (Some(column), Some(op), Some(value)) = (&params.column, &params.op, &params.value) else {
        return table.clone();
    };
    let Some(col) = table.column(column) else {
        return table.clone();
    };
    if !COMPARISON_OPS.contains(&op.as_str()) {
        return table.clone();
    }

    let mask: Vec<bool> = col
        .values
        .iter()
        .map(|actual| matches(actual, op, value))
        .collect();
    table.filter_rows(&mask)
}

/// Evaluate one comparison. Null cells and type mismatches never match.
fn matches(actual: &Scalar, op: &str, wanted: &Value) -> bool {
    match (actual, wanted) {
        (Scalar::Null, _) => false,
        (Scalar::Bool(b), Value::Bool(w)) => op == "==" && b == w,
        (Scalar::Str(s), Value::String(w)) => match op {
            ">" => s.as_str() > w.as_str(),
            "<" => s.as_str() < w.as_str(),
            "==" => s == w,
            ">=" => s.as_str() >= w.as_str(),
            "<=" => s.as_str() <= w.as_str(),
            _ => false,
        },
        (actual, Value::Number(n)) => {
            let (Some(a), Some(w)) = (actual.as_f64(), n.as_f64()) else {
                return false;
            };
            match op {
                ">" => a > w,
                "<" => a < w,
                "==" => a == w,
                ">=" => a >= w,
                "<=" => a <= w,
                _ => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabex_core::types::Column;

    fn scores() -> Table {
        Table::new(vec![
            Column::new(
                "name",
                vec![
                    Scalar::Str("Ada".into()),
                    Scalar::Str("Bo".into()),
                    Scalar::Str("Cy".into()),
                ],
            ),
            Column::new(
                "score",
                vec![Scalar::I64(80), Scalar::I64(90), Scalar::I64(70)],
            ),
        ])
    }

    fn params(column: &str, op: &str, value: Value) -> FilterParams {
        FilterParams {
            condition: None,
            column: Some(column.into()),
            op: Some(op.into()),
            value: Some(value),
        }
    }

    #[test]
    fn numeric_greater_than() {
        let out = apply(&scores(), &params("score", ">", json!(85)));
        assert_eq!(out.num_rows(), 1);
        assert_eq!(out.column("score").unwrap().values, vec![Scalar::I64(90)]);
        assert_eq!(out.column("name").unwrap().values, vec![Scalar::Str("Bo".into())]);
    }

    #[test]
    fn string_equality() {
        let out = apply(&scores(), &params("name", "==", json!("Cy")));
        assert_eq!(out.num_rows(), 1);
        assert_eq!(out.column("score").unwrap().values, vec![Scalar::I64(70)]);
    }

    #[test]
    fn absent_column_is_noop() {
        let out = apply(&scores(), &params("grade", ">", json!(1)));
        assert_eq!(out, scores());
    }

    #[test]
    fn unknown_operator_is_noop() {
        let out = apply(&scores(), &params("score", "!=", json!(80)));
        assert_eq!(out, scores());
    }

    #[test]
    fn first_row_condition_takes_head() {
        let p = FilterParams {
            condition: Some("row_index == 0".into()),
            ..Default::default()
        };
        let out = apply(&scores(), &p);
        assert_eq!(out.num_rows(), 1);
        assert_eq!(out.column("score").unwrap().values, vec![Scalar::I64(80)]);
    }

    #[test]
    fn condition_wins_over_column_form() {
        let mut p = params("score", ">", json!(85));
        p.condition = Some("row_index == 0".into());
        assert_eq!(apply(&scores(), &p).num_rows(), 1);
        assert_eq!(
            apply(&scores(), &p).column("score").unwrap().values,
            vec![Scalar::I64(80)]
        );
    }

    #[test]
    fn unrecognized_condition_is_noop() {
        let p = FilterParams {
            condition: Some("row_index > 5".into()),
            ..Default::default()
        };
        assert_eq!(apply(&scores(), &p), scores());
    }

    #[test]
    fn missing_params_are_noop() {
        assert_eq!(apply(&scores(), &FilterParams::default()), scores());
    }

    #[test]
    fn type_mismatch_matches_nothing() {
        let out = apply(&scores(), &params("name", ">", json!(5)));
        assert_eq!(out.num_rows(), 0);
    }
}
