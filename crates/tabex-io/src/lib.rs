#![forbid(unsafe_code)]
//! tabex-io: turning raw uploads into tables.

pub mod csv;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(String),
}

pub type Result<T> = std::result::Result<T, IoError>;

pub use csv::{read_csv_path, read_csv_str};
