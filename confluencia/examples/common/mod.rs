use confluencia::AnalysisConnector;
use std::sync::Arc;

/// Fixture connector when `CONFLUENCIA_EXAMPLES_USE_MOCK` is set, otherwise a
/// remote connector at `CONFLUENCIA_ANALYSIS_URL` (default `http://127.0.0.1:8000`).
#[must_use]
pub fn get_connector() -> Arc<dyn AnalysisConnector> {
    if std::env::var("CONFLUENCIA_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Arc::new(confluencia_mock::MockConnector::new());
    }
    let base = std::env::var("CONFLUENCIA_ANALYSIS_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    Arc::new(
        confluencia_remote::RemoteConnector::builder()
            .base_url(base)
            .build()
            .expect("valid analysis service URL"),
    )
}
