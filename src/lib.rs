#![forbid(unsafe_code)]
//! Umbrella crate for the tabex workspace.
//!
//! Re-exports the member crates so the workspace-level integration tests and
//! benches can depend on a single package.

pub use tabex_agent;
pub use tabex_chart;
pub use tabex_core;
pub use tabex_exec;
pub use tabex_io;
pub use tabex_ops;
pub use tabex_plan;
