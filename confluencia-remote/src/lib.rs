//! confluencia-remote
//!
//! Connector that implements `AnalysisConnector` over HTTP. Each call issues
//! `GET {base}/analizar_mercado?symbol=..&interval=..&api_key=..` and decodes
//! the JSON object body into a `Verdict` exactly as the service sent it.
#![warn(missing_docs)]

mod builder;

use std::time::Duration;

use async_trait::async_trait;
use confluencia_core::{AnalysisConnector, AnalysisRequest, ConfluenciaError, Verdict};
use reqwest::StatusCode;
use url::Url;

pub use builder::RemoteConnectorBuilder;

/// Analysis Port backed by a remote analysis service.
pub struct RemoteConnector {
    http: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl RemoteConnector {
    /// Connector name used in errors and logs.
    pub const NAME: &'static str = "confluencia-remote";

    /// Path of the analysis endpoint, relative to the base URL.
    pub const ENDPOINT: &'static str = "analizar_mercado";

    /// Per-call timeout applied when the builder is not given one.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Base URL calls are made against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, req: &AnalysisRequest<'_>) -> Url {
        let mut url = self.base.clone();
        // the builder rejects cannot-be-a-base URLs
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty().push(Self::ENDPOINT);
        }
        url.query_pairs_mut()
            .append_pair("symbol", req.symbol.as_str())
            .append_pair("interval", req.timeframe.as_interval())
            .append_pair("api_key", req.api_key.expose());
        url
    }

    fn normalize_error(&self, e: reqwest::Error) -> ConfluenciaError {
        if e.is_timeout() {
            return ConfluenciaError::connector(
                Self::NAME,
                format!("request timed out after {}ms", self.timeout.as_millis()),
            );
        }
        // strip the URL: it carries the credential
        ConfluenciaError::connector(Self::NAME, e.without_url().to_string())
    }

    fn map_status(status: StatusCode, req: &AnalysisRequest<'_>) -> Result<(), ConfluenciaError> {
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::NOT_FOUND {
            Err(ConfluenciaError::not_found(format!(
                "analysis for {}",
                req.describe()
            )))
        } else {
            Err(ConfluenciaError::connector(
                Self::NAME,
                format!("analysis service answered {status}"),
            ))
        }
    }
}

#[async_trait]
impl AnalysisConnector for RemoteConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Remote analysis service"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "confluencia_remote::analyze",
            skip(self, req),
            fields(symbol = %req.symbol, timeframe = %req.timeframe),
        )
    )]
    async fn analyze(&self, req: AnalysisRequest<'_>) -> Result<Verdict, ConfluenciaError> {
        let url = self.endpoint(&req);
        let resp = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.normalize_error(e))?;

        let status = resp.status();
        #[cfg(feature = "tracing")]
        tracing::debug!(%status, "analysis service responded");
        Self::map_status(status, &req)?;

        let body = resp.bytes().await.map_err(|e| self.normalize_error(e))?;
        serde_json::from_slice::<Verdict>(&body).map_err(|e| {
            ConfluenciaError::Data(format!("undecodable verdict for {}: {e}", req.describe()))
        })
    }
}
