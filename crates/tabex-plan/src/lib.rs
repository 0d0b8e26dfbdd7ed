#![forbid(unsafe_code)]
//! tabex-plan: the plan model.
//!
//! A plan is an ordered sequence of operation steps produced by an unreliable
//! upstream generator (a language model). The model here is deliberately
//! forgiving: unknown operation names decode to an `Unsupported` step and
//! wrong-typed params collapse to their defaults, so a single bad step never
//! rejects the whole plan. The executor decides what each of those means.

pub mod params;
pub mod plan;

pub use params::{
    AggregateParams, DescribeParams, ErrorParams, FilterParams, SortParams, VisualizeParams,
};
pub use plan::{Plan, Step};
