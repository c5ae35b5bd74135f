use std::time::Duration;

use confluencia_core::ConfluenciaError;
use url::Url;

use crate::RemoteConnector;

/// Builder for [`RemoteConnector`].
#[derive(Default)]
pub struct RemoteConnectorBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl RemoteConnectorBuilder {
    /// Empty builder; [`base_url`](Self::base_url) is required.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the analysis service, e.g. `http://localhost:8000`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-call timeout. Defaults to [`RemoteConnector::DEFAULT_TIMEOUT`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, pooling).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no base URL was given, if it does not parse, or
    /// if it cannot carry a path (e.g. `mailto:`).
    pub fn build(self) -> Result<RemoteConnector, ConfluenciaError> {
        let Some(raw) = self.base_url else {
            return Err(ConfluenciaError::InvalidArg(
                "no base URL configured for the remote analysis service".to_string(),
            ));
        };
        let base = Url::parse(raw.trim())
            .map_err(|e| ConfluenciaError::InvalidArg(format!("invalid base URL '{raw}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ConfluenciaError::InvalidArg(format!(
                "base URL '{raw}' cannot carry a path"
            )));
        }
        Ok(RemoteConnector {
            http: self.client.unwrap_or_default(),
            base,
            timeout: self.timeout.unwrap_or(RemoteConnector::DEFAULT_TIMEOUT),
        })
    }
}

impl RemoteConnector {
    /// Start configuring a remote connector.
    ///
    /// ```rust,ignore
    /// let connector = confluencia_remote::RemoteConnector::builder()
    ///     .base_url("http://localhost:8000")
    ///     .timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> RemoteConnectorBuilder {
        RemoteConnectorBuilder::new()
    }
}
