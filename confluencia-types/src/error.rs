use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the confluencia workspace.
///
/// Covers argument validation, malformed upstream data, connector-tagged
/// failures and not-found conditions reported by the Analysis Port.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfluenciaError {
    /// Invalid input argument (unknown timeframe, empty symbol, ...).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data (undecodable payloads, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "analysis for EURUSD@5min".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl ConfluenciaError {
    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Whether the error was raised by input validation rather than upstream.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArg(_))
    }
}

impl From<serde_json::Error> for ConfluenciaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
