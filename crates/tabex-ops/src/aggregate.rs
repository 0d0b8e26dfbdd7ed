//! Aggregate handler: group by one column, reduce another.
//!
//! Output replaces the working table with one row per distinct group value,
//! ordered by group key. The aggregated column keeps its original name.

use tabex_core::types::{scalar_cmp, Column, Scalar, Table};
use tabex_plan::params::AggregateParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AggFunc {
    Mean,
    Sum,
    Max,
    Min,
}

impl AggFunc {
    /// Unrecognized (or absent) function names default to mean.
    fn parse(name: Option<&str>) -> Self {
        match name {
            Some("sum") => AggFunc::Sum,
            Some("max") => AggFunc::Max,
            Some("min") => AggFunc::Min,
            _ => AggFunc::Mean,
        }
    }

    fn reduce<'a>(&self, values: impl Iterator<Item = &'a Scalar>) -> Scalar {
        match self {
            AggFunc::Mean => {
                let nums: Vec<f64> = values.filter_map(Scalar::as_f64).collect();
                if nums.is_empty() {
                    Scalar::Null
                } else {
                    Scalar::F64(nums.iter().sum::<f64>() / nums.len() as f64)
                }
            }
            AggFunc::Sum => {
                let mut all_int = true;
                let mut int_sum: i64 = 0;
                let mut float_sum = 0.0;
                let mut count = 0usize;
                for v in values {
                    match v {
                        Scalar::I64(i) => {
                            int_sum = int_sum.wrapping_add(*i);
                            float_sum += *i as f64;
                            count += 1;
                        }
                        Scalar::F64(f) => {
                            all_int = false;
                            float_sum += f;
                            count += 1;
                        }
                        _ => {}
                    }
                }
                if count == 0 {
                    Scalar::Null
                } else if all_int {
                    Scalar::I64(int_sum)
                } else {
                    Scalar::F64(float_sum)
                }
            }
            AggFunc::Max => values
                .filter(|v| !v.is_null())
                .max_by(|a, b| scalar_cmp(a, b))
                .cloned()
                .unwrap_or(Scalar::Null),
            AggFunc::Min => values
                .filter(|v| !v.is_null())
                .min_by(|a, b| scalar_cmp(a, b))
                .cloned()
                .unwrap_or(Scalar::Null),
        }
    }
}

pub fn apply(table: &Table, params: &AggregateParams) -> Table {
    let (Some(group_by), Some(agg_column)) = (&params.group_by, &params.agg_column) else {
        return table.clone();
    };
    let (Some(keys), Some(vals)) = (table.column(group_by), table.column(agg_column)) else {
        return table.clone();
    };
    let func = AggFunc::parse(params.agg_func.as_deref());

    // Group row indices by key, keeping groups ordered by key value.
    let mut groups: Vec<(Scalar, Vec<usize>)> = Vec::new();
    for (row, key) in keys.values.iter().enumerate() {
        match groups.binary_search_by(|(k, _)| scalar_cmp(k, key)) {
            Ok(pos) => groups[pos].1.push(row),
            Err(pos) => groups.insert(pos, (key.clone(), vec![row])),
        }
    }

    let mut out_keys = Vec::with_capacity(groups.len());
    let mut out_vals = Vec::with_capacity(groups.len());
    for (key, rows) in groups {
        out_vals.push(func.reduce(rows.iter().map(|&i| &vals.values[i])));
        out_keys.push(key);
    }

    Table::new(vec![
        Column::new(group_by.clone(), out_keys),
        Column::new(agg_column.clone(), out_vals),
    ])
}
