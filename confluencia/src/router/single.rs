use crate::Confluencia;
use confluencia_core::{ConfluenciaError, Symbol, Timeframe, Verdict};

impl Confluencia {
    /// Run the Analysis Port once and return its verdict unmodified.
    ///
    /// No summarization and no decision logic is applied; unknown keys in the
    /// verdict are preserved.
    ///
    /// # Errors
    /// Returns the connector's error as-is. There is no retry.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "confluencia::router",
            skip(self),
            fields(symbol = %symbol, timeframe = %timeframe),
        )
    )]
    pub async fn analyze(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> Result<Verdict, ConfluenciaError> {
        self.port_call(symbol, timeframe).await
    }

    /// [`analyze`](Self::analyze) for the configured default symbol.
    ///
    /// # Errors
    /// Returns the connector's error as-is.
    pub async fn analyze_default(&self, timeframe: Timeframe) -> Result<Verdict, ConfluenciaError> {
        self.analyze(&self.cfg.default_symbol, timeframe).await
    }
}
