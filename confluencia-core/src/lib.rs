//! confluencia-core
//!
//! Core contracts and pure logic shared across the confluencia workspace.
//!
//! - `connector`: the `AnalysisConnector` trait (the Analysis Port) and its request type.
//! - `summary`: projection of a raw `Verdict` into a fixed-shape `TimeframeSummary`.
//! - `confluence`: the unanimous-agreement decision rule over three timeframes.
//!
//! Everything here is runtime-agnostic; the orchestrator in the `confluencia`
//! crate decides how Analysis Port calls are scheduled.
#![warn(missing_docs)]

/// The Analysis Port contract.
pub mod connector;
/// The multi-timeframe decision rule.
pub mod confluence;
/// The per-timeframe summarizer.
pub mod summary;

pub use confluence::{CONFLUENCE_DETECTED, NO_CONFLUENCE, decide};
pub use connector::{AnalysisConnector, AnalysisRequest};
pub use summary::summarize;

pub use confluencia_types::{
    ApiKey, ConfluenceReport, ConfluenciaConfig, ConfluenciaError, Confirmation, ResolveStrategy,
    Signal, Symbol, Timeframe, TimeframeSummary, Verdict,
};
