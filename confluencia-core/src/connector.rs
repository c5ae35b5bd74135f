use async_trait::async_trait;

use confluencia_types::{ApiKey, ConfluenciaError, Symbol, Timeframe, Verdict};

/// One Analysis Port invocation: which symbol, which interval, which credential.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    /// Upper-cased symbol to analyse.
    pub symbol: &'a Symbol,
    /// Data-provider credential, passed through verbatim.
    pub api_key: &'a ApiKey,
    /// Interval to analyse.
    pub timeframe: Timeframe,
}

impl<'a> AnalysisRequest<'a> {
    /// Bundle the three call parameters.
    #[must_use]
    pub const fn new(symbol: &'a Symbol, api_key: &'a ApiKey, timeframe: Timeframe) -> Self {
        Self {
            symbol,
            api_key,
            timeframe,
        }
    }

    /// Short description used in not-found messages, e.g. `"EURUSD@5min"`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{}@{}", self.symbol, self.timeframe)
    }
}

/// The Analysis Port: computes a [`Verdict`] for one (symbol, timeframe) pair.
///
/// Implementations own everything the confluence logic treats as opaque:
/// price retrieval, zone and order-block detection, and any timeout on the
/// call. Failures are reported through the `Result`, never by panicking.
#[async_trait]
pub trait AnalysisConnector: Send + Sync {
    /// Stable connector name used in error tagging and logs.
    fn name(&self) -> &'static str;

    /// Human-readable vendor name; defaults to [`name`](Self::name).
    fn vendor(&self) -> &'static str {
        self.name()
    }

    /// Analyse one symbol on one timeframe.
    async fn analyze(&self, req: AnalysisRequest<'_>) -> Result<Verdict, ConfluenciaError>;
}
