#![forbid(unsafe_code)]
//! tabex-exec: the step executor.
//!
//! Walks a plan's steps in order over a working table and accumulates an
//! `ExecutionResult`. Execution is synchronous and single-pass; the only
//! early exits are an `error` step and an unsupported operation name.

pub mod executor;
pub mod result;

pub use executor::Executor;
pub use result::{ExecutionResult, PREVIEW_ROWS};
