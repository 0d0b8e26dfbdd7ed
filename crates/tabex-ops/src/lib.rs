#![forbid(unsafe_code)]
//! tabex-ops: the four table operation handlers.
//!
//! Each handler is a pure function of (table, params) -> table and never
//! fails: invalid or missing parameters pass the input table through
//! unchanged. Plans come from a language model, so partially-wrong steps are
//! expected input, not errors.

pub mod aggregate;
pub mod describe;
pub mod filter;
pub mod sort;
