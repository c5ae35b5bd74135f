//! Configuration types shared by the orchestrator and its front-ends.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::market::Symbol;

/// Strategy for issuing the three per-timeframe Analysis Port calls.
///
/// Both strategies produce identical reports; they differ only in latency
/// and in how many calls are in flight at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ResolveStrategy {
    /// Issue all calls at once; the first failure drops the rest.
    #[default]
    Concurrent,
    /// Issue calls one after another in timeframe order; stop at the first failure.
    Sequential,
}

/// Data-provider credential handed to the Analysis Port verbatim.
///
/// `Debug` output is redacted so the key does not leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Sentinel used when no credential is configured.
    pub const DEMO: &'static str = "demo";

    /// Wrap a raw credential string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the raw credential.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self::new(Self::DEMO)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == Self::DEMO {
            f.write_str("ApiKey(demo)")
        } else {
            f.write_str("ApiKey(***)")
        }
    }
}

/// Process-wide configuration for the `Confluencia` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfluenciaConfig {
    /// Credential passed through to every Analysis Port call.
    pub api_key: ApiKey,
    /// Symbol analysed when a request does not name one.
    pub default_symbol: Symbol,
    /// How the confluence resolver schedules its three calls.
    pub resolve_strategy: ResolveStrategy,
}

impl ConfluenciaConfig {
    /// Environment variable holding the data-provider credential.
    pub const API_KEY_VAR: &'static str = "ALPHA_VANTAGE_API_KEY";
    /// Symbol used when none is supplied.
    pub const DEFAULT_SYMBOL: &'static str = "EURUSD";

    /// Read the configuration from the process environment.
    ///
    /// Only the credential is environment-sourced; it falls back to
    /// [`ApiKey::DEMO`] when unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(Self::API_KEY_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(ApiKey::default, ApiKey::new);
        Self {
            api_key,
            ..Self::default()
        }
    }
}

impl Default for ConfluenciaConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKey::default(),
            default_symbol: Symbol(Self::DEFAULT_SYMBOL.to_string()),
            resolve_strategy: ResolveStrategy::default(),
        }
    }
}
