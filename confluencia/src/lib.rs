//! Confluencia resolves trading signals across timeframes.
//!
//! Overview
//! - Wraps a single Analysis Port (`AnalysisConnector`) behind an orchestrator
//!   configured once per process: credential, default symbol, scheduling.
//! - `analyze` returns one timeframe's verdict exactly as the port produced it.
//! - `confirm` runs the port on M1, M5 and M15, summarizes each verdict and
//!   confirms a signal only when all three agree on a non-neutral label.
//! - `ApiService` is a transport-agnostic request surface mapping request
//!   targets (`/analisis/confirmacion?symbol=gbpusd`) to JSON responses.
//!
//! Key behaviors and trade-offs
//! - No retry, no cache, no partial results: one failed port call fails the
//!   whole confluence request with that same error.
//! - `ResolveStrategy::Concurrent` cuts latency to the slowest call and drops
//!   outstanding calls after the first failure; `Sequential` keeps at most one
//!   call in flight. Reports are identical either way.
//! - The resolver sets no timeout of its own; bound calls inside the connector.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use confluencia::{Confluencia, ConfluenciaConfig, Symbol};
//!
//! let engine = Confluencia::builder()
//!     .with_connector(Arc::new(confluencia_mock::MockConnector::new()))
//!     .config(ConfluenciaConfig::from_env())
//!     .build()?;
//!
//! let report = engine.confirm(&Symbol::new("eurusd")?).await?;
//! println!("{} -> {}", report.symbol, report.confirmation);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
/// Transport-agnostic request surface.
pub mod service;

pub use core::{Confluencia, ConfluenciaBuilder};
pub use service::{ApiResponse, ApiService};

// Re-export core types for convenience
pub use confluencia_core::{
    AnalysisConnector, AnalysisRequest, ApiKey, CONFLUENCE_DETECTED, ConfluenceReport,
    ConfluenciaConfig, ConfluenciaError, Confirmation, NO_CONFLUENCE, ResolveStrategy, Signal,
    Symbol, Timeframe, TimeframeSummary, Verdict, decide, summarize,
};
