use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use confluencia::{
    AnalysisConnector, AnalysisRequest, Confirmation, Confluencia, ConfluenciaError,
    ResolveStrategy, Signal, Verdict,
};

use crate::helpers::{EURUSD, sym};

/// Tracks how many calls are in flight at once.
#[derive(Default)]
struct Gauge {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

struct GaugedConnector {
    gauge: Arc<Gauge>,
}

#[async_trait]
impl AnalysisConnector for GaugedConnector {
    fn name(&self) -> &'static str {
        "gauged"
    }

    async fn analyze(&self, req: AnalysisRequest<'_>) -> Result<Verdict, ConfluenciaError> {
        let now = self.gauge.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.gauge.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.gauge.in_flight.fetch_sub(1, Ordering::SeqCst);

        Ok(Verdict::new()
            .with_signal(Signal::Buy)
            .with(Verdict::RATIONALE, req.timeframe.to_string())
            .with(Verdict::ENTRY_PRICE, 1.085)
            .with(Verdict::TIMESTAMP, "2024-05-06T14:30:00Z"))
    }
}

async fn peak_for(strategy: ResolveStrategy) -> usize {
    let gauge = Arc::new(Gauge::default());
    let engine = Confluencia::builder()
        .with_connector(Arc::new(GaugedConnector {
            gauge: Arc::clone(&gauge),
        }))
        .resolve_strategy(strategy)
        .build()
        .unwrap();

    let report = engine.confirm(&sym(EURUSD)).await.unwrap();
    assert_eq!(report.confirmation, Confirmation::Confirmed(Signal::Buy));
    assert_eq!(report.m15.entry_price, serde_json::json!(1.085));
    assert_eq!(report.m1.time, "2024-05-06T14:30:00Z");
    gauge.peak.load(Ordering::SeqCst)
}

#[tokio::test]
async fn concurrent_keeps_all_three_calls_in_flight() {
    assert_eq!(peak_for(ResolveStrategy::Concurrent).await, 3);
}

#[tokio::test]
async fn sequential_keeps_one_call_in_flight() {
    assert_eq!(peak_for(ResolveStrategy::Sequential).await, 1);
}
