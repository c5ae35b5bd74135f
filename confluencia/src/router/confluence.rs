use crate::Confluencia;
use confluencia_core::{
    ConfluenceReport, ConfluenciaError, ResolveStrategy, Signal, Symbol, Timeframe, Verdict,
    decide, summarize,
};

impl Confluencia {
    /// Resolve multi-timeframe confluence for `symbol`.
    ///
    /// Runs the Analysis Port on M1, M5 and M15, summarizes each verdict and
    /// confirms a signal only if all three report the same non-neutral label.
    /// A verdict without a signal, or with an unrecognized one, counts as
    /// neutral.
    ///
    /// Behavior: all-or-nothing. The report always lists M1, M5, M15 in that
    /// order, whatever order the calls complete in.
    ///
    /// # Errors
    /// Returns the first Analysis Port error, unchanged. No partial report is
    /// produced and nothing is retried.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "confluencia::router",
            skip(self),
            fields(symbol = %symbol, strategy = ?self.cfg.resolve_strategy),
        )
    )]
    pub async fn confirm(&self, symbol: &Symbol) -> Result<ConfluenceReport, ConfluenciaError> {
        let [m1, m5, m15] = self.fetch_timeframes(symbol).await?;

        let signals = [&m1, &m5, &m15].map(|v| v.signal().unwrap_or(Signal::NONE));
        let (confirmation, rationale) = decide(signals);

        #[cfg(feature = "tracing")]
        tracing::debug!(?signals, %confirmation, "confluence resolved");

        Ok(ConfluenceReport {
            symbol: symbol.clone(),
            m1: summarize(&m1, Timeframe::M1),
            m5: summarize(&m5, Timeframe::M5),
            m15: summarize(&m15, Timeframe::M15),
            confirmation,
            rationale: rationale.to_string(),
        })
    }

    /// [`confirm`](Self::confirm) for the configured default symbol.
    ///
    /// # Errors
    /// Returns the first Analysis Port error, unchanged.
    pub async fn confirm_default(&self) -> Result<ConfluenceReport, ConfluenciaError> {
        self.confirm(&self.cfg.default_symbol).await
    }

    /// Fetch the verdicts for `Timeframe::ALL`, returned in that order.
    async fn fetch_timeframes(&self, symbol: &Symbol) -> Result<[Verdict; 3], ConfluenciaError> {
        let [tf1, tf5, tf15] = Timeframe::ALL;
        match self.cfg.resolve_strategy {
            ResolveStrategy::Sequential => {
                let m1 = self.port_call(symbol, tf1).await?;
                let m5 = self.port_call(symbol, tf5).await?;
                let m15 = self.port_call(symbol, tf15).await?;
                Ok([m1, m5, m15])
            }
            // try_join! drops the pending futures as soon as one fails
            _ => {
                let (m1, m5, m15) = futures::try_join!(
                    self.port_call(symbol, tf1),
                    self.port_call(symbol, tf5),
                    self.port_call(symbol, tf15),
                )?;
                Ok([m1, m5, m15])
            }
        }
    }
}
