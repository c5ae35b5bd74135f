use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use confluencia::AnalysisConnector;
use confluencia_mock::MockConnector;
use confluencia_remote::RemoteConnector;

/// Any value selects the fixture connector (CI, demos).
pub const USE_MOCK_VAR: &str = "CONFLUENCIA_USE_MOCK";
/// Base URL of the remote analysis service.
pub const ANALYSIS_URL_VAR: &str = "CONFLUENCIA_ANALYSIS_URL";
/// Per-call timeout for the remote analysis service, in seconds.
pub const TIMEOUT_VAR: &str = "CONFLUENCIA_TIMEOUT_SECS";

const DEFAULT_ANALYSIS_URL: &str = "http://127.0.0.1:8000";

/// Pick the Analysis Port from the environment.
pub fn from_env() -> anyhow::Result<Arc<dyn AnalysisConnector>> {
    if std::env::var_os(USE_MOCK_VAR).is_some() {
        tracing::info!("using fixture analysis connector");
        return Ok(Arc::new(MockConnector::new()));
    }

    let base = std::env::var(ANALYSIS_URL_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ANALYSIS_URL.to_string());

    let mut builder = RemoteConnector::builder().base_url(base.clone());
    if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
        let secs: u64 = raw
            .trim()
            .parse()
            .with_context(|| format!("{TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"))?;
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let connector = builder
        .build()
        .with_context(|| format!("configuring analysis service at {base}"))?;

    tracing::info!(base = %connector.base_url(), timeout = ?connector.timeout(), "using remote analysis connector");
    Ok(Arc::new(connector))
}
