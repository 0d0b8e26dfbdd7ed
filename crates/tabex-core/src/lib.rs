#![forbid(unsafe_code)]
//! tabex-core: value, column, table, and schema types shared across the
//! workspace.
//!
//! Design intent:
//! - Pure data, no IO. Readers live in `tabex-io`, handlers in `tabex-ops`.
//! - Steps replace the working table by value; nothing here mutates a table
//!   in place across step boundaries.

pub mod error;
pub mod prelude;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
