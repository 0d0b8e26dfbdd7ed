//! CSV reader with a header row and per-column type inference.
//!
//! Record parsing (quoting, escaped quotes, CRLF, blank-line skipping) is
//! delegated to the `csv` crate. Column types are inferred from the
//! non-empty cells: bool, then int64, then float64, falling back to string.
//! Empty cells become nulls.

use std::path::Path;

// `::` disambiguates the crate from this module.
use ::csv::ReaderBuilder;

use tabex_core::types::{Column, Scalar, Table};

use crate::{IoError, Result};

pub fn read_csv_path(path: &Path) -> Result<Table> {
    read_csv_str(&std::fs::read_to_string(path)?)
}

pub fn read_csv_str(src: &str) -> Result<Table> {
    // The reader stays flexible so ragged rows are reported here with their
    // row number instead of the crate's byte-offset message.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(src.as_bytes());

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| IoError::Csv(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if header.is_empty() {
        return Err(IoError::Csv("empty input".into()));
    }
    let width = header.len();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); width];
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IoError::Csv(e.to_string()))?;
        if record.len() != width {
            return Err(IoError::Csv(format!(
                "row {} has {} fields, expected {}",
                line + 2,
                record.len(),
                width
            )));
        }
        for (col, cell) in record.iter().enumerate() {
            cells[col].push(cell.to_string());
        }
    }

    let columns = header
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| infer_column(name, cells))
        .collect();
    Ok(Table::new(columns))
}

fn infer_column(name: String, cells: Vec<String>) -> Column {
    let filled: Vec<&str> = cells
        .iter()
        .map(String::as_str)
        .filter(|c| !c.is_empty())
        .collect();

    let values = if filled.is_empty() {
        cells.iter().map(|_| Scalar::Null).collect()
    } else if filled.iter().all(|c| parse_bool(c).is_some()) {
        map_cells(&cells, |c| Scalar::Bool(parse_bool(c).unwrap_or_default()))
    } else if filled.iter().all(|c| c.trim().parse::<i64>().is_ok()) {
        map_cells(&cells, |c| {
            Scalar::I64(c.trim().parse().unwrap_or_default())
        })
    } else if filled.iter().all(|c| c.trim().parse::<f64>().is_ok()) {
        map_cells(&cells, |c| {
            Scalar::F64(c.trim().parse().unwrap_or_default())
        })
    } else {
        map_cells(&cells, |c| Scalar::Str(c.to_string()))
    };

    Column::new(name, values)
}

fn map_cells(cells: &[String], f: impl Fn(&str) -> Scalar) -> Vec<Scalar> {
    cells
        .iter()
        .map(|c| if c.is_empty() { Scalar::Null } else { f(c) })
        .collect()
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.trim() {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabex_core::schema::DataType;

    #[test]
    fn reads_typed_columns() {
        let t = read_csv_str("name,score,gpa,ok\nAda,80,3.5,true\nBo,90,3.9,false\n").unwrap();
        assert_eq!(t.num_rows(), 2);
        assert_eq!(t.column("name").unwrap().data_type(), DataType::Utf8);
        assert_eq!(t.column("score").unwrap().data_type(), DataType::Int64);
        assert_eq!(t.column("gpa").unwrap().data_type(), DataType::Float64);
        assert_eq!(t.column("ok").unwrap().data_type(), DataType::Boolean);
        assert_eq!(t.column("score").unwrap().values[1], Scalar::I64(90));
    }

    #[test]
    fn mixed_ints_and_floats_widen_to_float() {
        let t = read_csv_str("x\n1\n2.5\n").unwrap();
        assert_eq!(
            t.column("x").unwrap().values,
            vec![Scalar::F64(1.0), Scalar::F64(2.5)]
        );
    }

    #[test]
    fn empty_cells_become_nulls() {
        let t = read_csv_str("name,score\nAda,\n,70\n").unwrap();
        assert_eq!(
            t.column("score").unwrap().values,
            vec![Scalar::Null, Scalar::I64(70)]
        );
        assert_eq!(
            t.column("name").unwrap().values,
            vec![Scalar::Str("Ada".into()), Scalar::Null]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let t = read_csv_str("score\n80\n\n70\n").unwrap();
        assert_eq!(
            t.column("score").unwrap().values,
            vec![Scalar::I64(80), Scalar::I64(70)]
        );
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let t = read_csv_str("note\n\"a, b\"\n\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(
            t.column("note").unwrap().values,
            vec![
                Scalar::Str("a, b".into()),
                Scalar::Str("say \"hi\"".into())
            ]
        );
    }

    #[test]
    fn quoted_fields_may_span_lines() {
        let t = read_csv_str("note\n\"line one\nline two\"\n").unwrap();
        assert_eq!(
            t.column("note").unwrap().values,
            vec![Scalar::Str("line one\nline two".into())]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let t = read_csv_str("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(t.num_rows(), 1);
        assert_eq!(t.column("b").unwrap().values, vec![Scalar::I64(2)]);
    }

    #[test]
    fn ragged_row_is_an_error() {
        let err = read_csv_str("a,b\n1\n").unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(read_csv_str("").is_err());
    }

    #[test]
    fn header_only_gives_empty_table() {
        let t = read_csv_str("a,b\n").unwrap();
        assert_eq!(t.num_rows(), 0);
        assert_eq!(t.num_columns(), 2);
    }
}
