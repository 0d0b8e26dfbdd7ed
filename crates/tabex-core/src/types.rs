//! Lightweight value/column/table types for in-memory execution.
//!
//! A `Table` is an ordered collection of named columns; rows are implicit by
//! position. Operation handlers consume a table by reference and produce a
//! new table value, so a failing or no-op step can never corrupt its input.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::schema::{DataType, Field, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Null => DataType::Utf8,
            Scalar::Bool(_) => DataType::Boolean,
            Scalar::I64(_) => DataType::Int64,
            Scalar::F64(_) => DataType::Float64,
            Scalar::Str(_) => DataType::Utf8,
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::I64(i) => Some(*i as f64),
            Scalar::F64(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::I64(i) => write!(f, "{i}"),
            Scalar::F64(x) => write!(f, "{x}"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<&Scalar> for Value {
    fn from(s: &Scalar) -> Value {
        match s {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::I64(i) => Value::Number((*i).into()),
            // Non-finite floats have no JSON representation.
            Scalar::F64(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            Scalar::Str(s) => Value::String(s.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Scalar>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Scalar>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Semantic type of the column: the first non-null value decides.
    pub fn data_type(&self) -> DataType {
        self.values
            .iter()
            .find(|v| !v.is_null())
            .map(Scalar::data_type)
            .unwrap_or(DataType::Utf8)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn schema(&self) -> Schema {
        Schema::new(
            self.columns
                .iter()
                .map(|c| {
                    let nullable = c.values.iter().any(Scalar::is_null);
                    Field::new(c.name.clone(), c.data_type(), nullable)
                })
                .collect(),
        )
    }

    /// First `n` rows, all columns.
    pub fn head(&self, n: usize) -> Table {
        Table::new(
            self.columns
                .iter()
                .map(|c| Column::new(c.name.clone(), c.values.iter().take(n).cloned().collect()))
                .collect(),
        )
    }

    /// Rows reordered by the given index permutation. Out-of-range indices
    /// are skipped.
    pub fn take(&self, indices: &[usize]) -> Table {
        Table::new(
            self.columns
                .iter()
                .map(|c| {
                    let values = indices
                        .iter()
                        .filter_map(|&i| c.values.get(i).cloned())
                        .collect();
                    Column::new(c.name.clone(), values)
                })
                .collect(),
        )
    }

    /// Rows whose mask entry is true. The mask is aligned by position; rows
    /// past the end of the mask are dropped.
    pub fn filter_rows(&self, mask: &[bool]) -> Table {
        Table::new(
            self.columns
                .iter()
                .map(|c| {
                    let values = c
                        .values
                        .iter()
                        .zip(mask.iter())
                        .filter(|(_, keep)| **keep)
                        .map(|(v, _)| v.clone())
                        .collect();
                    Column::new(c.name.clone(), values)
                })
                .collect(),
        )
    }

    /// Row-record view of the first `limit` rows, in column order.
    pub fn records(&self, limit: usize) -> Vec<Map<String, Value>> {
        let n = self.num_rows().min(limit);
        (0..n)
            .map(|row| {
                let mut record = Map::new();
                for col in &self.columns {
                    record.insert(col.name.clone(), Value::from(&col.values[row]));
                }
                record
            })
            .collect()
    }
}

/// Compare two scalars for sorting.
///
/// Nulls sort first, NaNs last among floats; mixed types order by variant.
pub fn scalar_cmp(a: &Scalar, b: &Scalar) -> Ordering {
    use Scalar::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Bool(x), Bool(y)) => x.cmp(y),
        (I64(x), I64(y)) => x.cmp(y),
        (F64(x), F64(y)) => float_cmp(*x, *y),
        // Int/float mixes compare numerically.
        (I64(x), F64(y)) => float_cmp(*x as f64, *y),
        (F64(x), I64(y)) => float_cmp(*x, *y as f64),
        (Str(x), Str(y)) => x.cmp(y),
        // Remaining mixed types: order by variant order.
        _ => scalar_type_order(a).cmp(&scalar_type_order(b)),
    }
}

fn float_cmp(x: f64, y: f64) -> Ordering {
    if x.is_nan() && y.is_nan() {
        Ordering::Equal
    } else if x.is_nan() {
        Ordering::Greater
    } else if y.is_nan() {
        Ordering::Less
    } else {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    }
}

fn scalar_type_order(s: &Scalar) -> u8 {
    use Scalar::*;
    match s {
        Null => 0,
        Bool(_) => 1,
        I64(_) => 2,
        F64(_) => 3,
        Str(_) => 4,
    }
}
