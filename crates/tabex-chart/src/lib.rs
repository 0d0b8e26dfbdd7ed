#![forbid(unsafe_code)]
//! tabex-chart: chart rendering and artifact storage.
//!
//! Rendering produces an SVG document, or `None` when an axis column is
//! missing from the table; the store persists the document under a
//! content-addressed name so concurrent runs never clobber each other.

pub mod artifact;
pub mod svg;

pub use artifact::{ArtifactStore, ChartError};
pub use svg::{render, ChartKind};
