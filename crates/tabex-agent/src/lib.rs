#![forbid(unsafe_code)]
//! tabex-agent: the plan-source boundary.
//!
//! A [`Provider`] turns a prompt into raw model text; [`analyze`] builds the
//! planner prompt from a table's schema and the user query, decodes the
//! model's reply into a plan (lossily; garbage becomes a synthetic error
//! step), and hands the plan to the executor. The executor's tolerance
//! policy does the rest — the agent never validates plan semantics itself.

pub mod agent;
pub mod error;
pub mod prompt;
pub mod provider;

pub use agent::{analyze, Analysis, INVALID_PLAN_REASON};
pub use error::{AgentError, Result};
pub use provider::{create_provider, MockProvider, OpenAiProvider, Provider};
