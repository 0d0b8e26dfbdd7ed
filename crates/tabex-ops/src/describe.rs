//! Describe handler: summary statistics over the selected columns.
//!
//! Output replaces the working table with a statistics table: a `statistic`
//! label column plus one column per described input column. Numeric columns
//! get count/mean/std/min/25%/50%/75%/max (sample std, linearly interpolated
//! quantiles); when the selection holds no numeric columns at all, the
//! non-numeric ones get count/unique/top/freq instead. Numeric columns win
//! when the selection mixes both.

use std::cmp::Ordering;

use tabex_core::schema::DataType;
use tabex_core::types::{Column, Scalar, Table};
use tabex_plan::params::DescribeParams;

const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

const OBJECT_STAT_LABELS: [&str; 4] = ["count", "unique", "top", "freq"];

pub fn apply(table: &Table, params: &DescribeParams) -> Table {
    let targets: Vec<&Column> = match &params.columns {
        // An empty list means "no subset requested", same as absent.
        Some(requested) if !requested.is_empty() => {
            // Subset is filtered to columns actually present; an entirely
            // invalid subset is a no-op.
            let present: Vec<&Column> =
                requested.iter().filter_map(|n| table.column(n)).collect();
            if present.is_empty() {
                return table.clone();
            }
            present
        }
        _ => table.columns.iter().collect(),
    };
    if targets.is_empty() {
        return table.clone();
    }

    let numeric: Vec<&Column> = targets
        .iter()
        .copied()
        .filter(|c| matches!(c.data_type(), DataType::Int64 | DataType::Float64))
        .collect();

    if !numeric.is_empty() {
        let mut columns = vec![label_column(&STAT_LABELS)];
        for col in numeric {
            columns.push(Column::new(col.name.clone(), summarize(col)));
        }
        return Table::new(columns);
    }

    let mut columns = vec![label_column(&OBJECT_STAT_LABELS)];
    for col in targets {
        columns.push(Column::new(col.name.clone(), summarize_object(col)));
    }
    Table::new(columns)
}

fn label_column(labels: &[&str]) -> Column {
    Column::new(
        "statistic",
        labels.iter().map(|s| Scalar::Str((*s).to_string())).collect(),
    )
}

fn summarize(col: &Column) -> Vec<Scalar> {
    let mut xs: Vec<f64> = col.values.iter().filter_map(Scalar::as_f64).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = xs.len();
    if n == 0 {
        let mut out = vec![Scalar::F64(0.0)];
        out.extend(std::iter::repeat(Scalar::Null).take(STAT_LABELS.len() - 1));
        return out;
    }

    let mean = xs.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        Scalar::F64(var.sqrt())
    } else {
        Scalar::Null
    };

    vec![
        Scalar::F64(n as f64),
        Scalar::F64(mean),
        std,
        Scalar::F64(xs[0]),
        Scalar::F64(quantile(&xs, 0.25)),
        Scalar::F64(quantile(&xs, 0.50)),
        Scalar::F64(quantile(&xs, 0.75)),
        Scalar::F64(xs[n - 1]),
    ]
}

/// count/unique/top/freq over the non-null values; first-seen value wins a
/// frequency tie.
fn summarize_object(col: &Column) -> Vec<Scalar> {
    let mut counts: Vec<(Scalar, usize)> = Vec::new();
    let mut count = 0i64;
    for v in col.values.iter().filter(|v| !v.is_null()) {
        count += 1;
        match counts.iter_mut().find(|e| e.0 == *v) {
            Some(e) => e.1 += 1,
            None => counts.push((v.clone(), 1)),
        }
    }

    let mut top: Option<(&Scalar, usize)> = None;
    for (v, n) in &counts {
        if top.map_or(true, |(_, m)| *n > m) {
            top = Some((v, *n));
        }
    }

    vec![
        Scalar::I64(count),
        Scalar::I64(counts.len() as i64),
        top.map(|(v, _)| v.clone()).unwrap_or(Scalar::Null),
        top.map(|(_, n)| Scalar::I64(n as i64)).unwrap_or(Scalar::Null),
    ]
}

/// Quantile of a sorted, non-empty slice, linearly interpolated between
/// closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
