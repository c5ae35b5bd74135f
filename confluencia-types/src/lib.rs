//! Confluencia data transfer objects and configuration primitives.
//!
//! Everything that crosses a crate boundary lives here: market identifiers
//! (`Symbol`, `Timeframe`, `Signal`), the Analysis Port's `Verdict` record,
//! the per-timeframe and confluence reports, configuration, and the unified
//! error type.
#![warn(missing_docs)]

mod config;
mod error;
mod market;
mod reports;
mod verdict;

pub use config::{ApiKey, ConfluenciaConfig, ResolveStrategy};
pub use error::ConfluenciaError;
pub use market::{Signal, Symbol, Timeframe};
pub use reports::{ConfluenceReport, Confirmation, TimeframeSummary};
pub use verdict::Verdict;
