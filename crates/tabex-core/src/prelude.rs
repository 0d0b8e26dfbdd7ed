//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::schema::{DataType, Field, Schema};
pub use crate::types::{scalar_cmp, Column, Scalar, Table};
