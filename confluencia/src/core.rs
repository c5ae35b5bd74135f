use std::sync::Arc;

use confluencia_core::{
    AnalysisConnector, AnalysisRequest, ApiKey, ConfluenciaConfig, ConfluenciaError,
    ResolveStrategy, Symbol, Timeframe, Verdict,
};

/// Orchestrator that runs the Analysis Port for single and multi-timeframe requests.
///
/// Holds no per-request state: it can be shared behind an `Arc` and used from
/// any number of tasks at once.
pub struct Confluencia {
    pub(crate) connector: Arc<dyn AnalysisConnector>,
    pub(crate) cfg: ConfluenciaConfig,
}

/// Builder for constructing a `Confluencia` orchestrator with custom configuration.
pub struct ConfluenciaBuilder {
    connector: Option<Arc<dyn AnalysisConnector>>,
    cfg: ConfluenciaConfig,
}

impl Default for ConfluenciaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfluenciaBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: the `demo` credential, `EURUSD` as default symbol and
    /// concurrent resolution. No connector is registered; [`with_connector`]
    /// is required before [`build`].
    ///
    /// [`with_connector`]: Self::with_connector
    /// [`build`]: Self::build
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: ConfluenciaConfig::default(),
        }
    }

    /// Register the Analysis Port. A second call replaces the first.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn AnalysisConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole configuration, e.g. with [`ConfluenciaConfig::from_env`].
    #[must_use]
    pub fn config(mut self, cfg: ConfluenciaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the credential passed through to every Analysis Port call.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.cfg.api_key = key;
        self
    }

    /// Set the symbol used by requests that do not name one.
    #[must_use]
    pub fn default_symbol(mut self, symbol: Symbol) -> Self {
        self.cfg.default_symbol = symbol;
        self
    }

    /// Select how the confluence resolver schedules its three calls.
    ///
    /// - `Concurrent`: all three in flight at once; the first failure drops the rest.
    /// - `Sequential`: M1, then M5, then M15; stops at the first failure.
    #[must_use]
    pub const fn resolve_strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.cfg.resolve_strategy = strategy;
        self
    }

    /// Build the `Confluencia` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector has been registered via [`with_connector`].
    ///
    /// [`with_connector`]: Self::with_connector
    pub fn build(self) -> Result<Confluencia, ConfluenciaError> {
        let Some(connector) = self.connector else {
            return Err(ConfluenciaError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        Ok(Confluencia {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Confluencia {
    /// Start building a new `Confluencia` instance.
    ///
    /// ```rust,ignore
    /// let engine = confluencia::Confluencia::builder()
    ///     .with_connector(connector)
    ///     .api_key(confluencia::ApiKey::new("..."))
    ///     .resolve_strategy(confluencia::ResolveStrategy::Sequential)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> ConfluenciaBuilder {
        ConfluenciaBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ConfluenciaConfig {
        &self.cfg
    }

    /// Name of the registered Analysis Port.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    /// One Analysis Port call with the configured credential.
    ///
    /// Errors are returned exactly as the connector produced them.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "confluencia::core::port_call",
            skip(self),
            fields(connector = self.connector.name(), symbol = %symbol, timeframe = %timeframe),
        )
    )]
    pub(crate) async fn port_call(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> Result<Verdict, ConfluenciaError> {
        let req = AnalysisRequest::new(symbol, &self.cfg.api_key, timeframe);
        let res = self.connector.analyze(req).await;
        #[cfg(feature = "tracing")]
        if let Err(e) = &res {
            tracing::warn!(error = %e, "analysis port call failed");
        }
        res
    }
}
