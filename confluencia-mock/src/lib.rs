//! Mock analysis connectors for tests, demos and CI.
//!
//! - [`MockConnector`] serves static fixture verdicts keyed by symbol.
//! - [`DynamicMockConnector`] is scripted at runtime through a controller.

use async_trait::async_trait;
use confluencia_core::{
    AnalysisConnector, AnalysisRequest, ConfluenciaError, Symbol, Timeframe, Verdict,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, RecordedRequest};

/// Mock connector for CI-safe runs. Provides deterministic verdicts from static fixtures.
///
/// Fixture symbols:
/// - `EURUSD`: `buy` on every timeframe (confluence).
/// - `GBPUSD`: `buy` / `sell` / `buy` (no confluence).
/// - `USDJPY`: `hold` on every timeframe.
/// - `AUDUSD`: sparse verdicts, no signal on 5min.
/// - `FAIL`: every call fails; `M5FAIL`: only the 5min call fails.
///
/// Any other symbol answers `NotFound`.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used in errors.
    pub const NAME: &'static str = "confluencia-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &Symbol, tf: Timeframe) -> Result<(), ConfluenciaError> {
        match (symbol.as_str(), tf) {
            ("FAIL", _) | ("M5FAIL", Timeframe::M5) => Err(ConfluenciaError::connector(
                Self::NAME,
                format!("forced failure: {symbol}@{tf}"),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AnalysisConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn analyze(&self, req: AnalysisRequest<'_>) -> Result<Verdict, ConfluenciaError> {
        Self::maybe_fail(req.symbol, req.timeframe)?;
        let lookup = match req.symbol.as_str() {
            "M5FAIL" => "EURUSD",
            other => other,
        };
        fixtures::verdicts::by_symbol(lookup, req.timeframe)
            .ok_or_else(|| ConfluenciaError::not_found(format!("analysis for {}", req.describe())))
    }
}
