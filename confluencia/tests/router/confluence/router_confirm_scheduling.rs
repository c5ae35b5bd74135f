use std::time::Duration;

use confluencia::{ApiKey, Confluencia, ResolveStrategy, Signal, Timeframe};
use confluencia_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

use crate::helpers::{EURUSD, engine, sym, verdict};

async fn script_delays(ctl: &DynamicMockController, delays: [u64; 3]) {
    for (tf, secs) in Timeframe::ALL.into_iter().zip(delays) {
        ctl.set_behavior(
            sym(EURUSD),
            tf,
            MockBehavior::Delay(
                Duration::from_secs(secs),
                verdict(Some(Signal::Buy), tf),
            ),
        )
        .await;
    }
}

#[tokio::test(start_paused = true)]
async fn report_order_is_fixed_when_m1_finishes_last() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    script_delays(&ctl, [30, 10, 1]).await;

    let report = engine.confirm(&sym(EURUSD)).await.unwrap();
    assert_eq!(report.m1.rationale(), Some("fixture 1min"));
    assert_eq!(report.m5.rationale(), Some("fixture 5min"));
    assert_eq!(report.m15.rationale(), Some("fixture 15min"));

    let json = serde_json::to_string(&report).unwrap();
    let (m1, m5, m15) = (
        json.find("\"M1\"").unwrap(),
        json.find("\"M5\"").unwrap(),
        json.find("\"M15\"").unwrap(),
    );
    assert!(m1 < m5 && m5 < m15);
}

#[tokio::test(start_paused = true)]
async fn concurrent_waits_for_the_slowest_call_only() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    script_delays(&ctl, [30, 10, 20]).await;

    let started = tokio::time::Instant::now();
    engine.confirm(&sym(EURUSD)).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(30));
    assert!(elapsed < Duration::from_secs(60), "elapsed {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn sequential_runs_calls_in_timeframe_order() {
    let (engine, ctl) = engine(ResolveStrategy::Sequential);
    script_delays(&ctl, [30, 10, 20]).await;

    let started = tokio::time::Instant::now();
    engine.confirm(&sym(EURUSD)).await.unwrap();
    assert!(started.elapsed() >= Duration::from_secs(60));

    let order: Vec<Timeframe> = ctl.requests().await.iter().map(|r| r.timeframe).collect();
    assert_eq!(order, Timeframe::ALL.to_vec());
}

#[tokio::test(start_paused = true)]
async fn strategies_produce_identical_reports() {
    let (concurrent, c_ctl) = engine(ResolveStrategy::Concurrent);
    let (sequential, s_ctl) = engine(ResolveStrategy::Sequential);
    script_delays(&c_ctl, [3, 2, 1]).await;
    script_delays(&s_ctl, [3, 2, 1]).await;

    let a = concurrent.confirm(&sym(EURUSD)).await.unwrap();
    let b = sequential.confirm(&sym(EURUSD)).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn credential_reaches_every_call() {
    let (connector, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let engine = Confluencia::builder()
        .with_connector(connector)
        .api_key(ApiKey::new("s3cr3t"))
        .build()
        .unwrap();
    ctl.set_all_timeframes(
        &sym(EURUSD),
        MockBehavior::Return(verdict(Some(Signal::Hold), Timeframe::M1)),
    )
    .await;

    engine.confirm(&sym(EURUSD)).await.unwrap();
    let reqs = ctl.requests().await;
    assert_eq!(reqs.len(), 3);
    assert!(reqs.iter().all(|r| r.api_key.expose() == "s3cr3t"));
    assert!(reqs.iter().all(|r| r.symbol.as_str() == EURUSD));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_engine_serves_parallel_requests() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    ctl.set_all_timeframes(
        &sym(EURUSD),
        MockBehavior::Return(verdict(Some(Signal::Sell), Timeframe::M1)),
    )
    .await;
    let engine = std::sync::Arc::new(engine);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = std::sync::Arc::clone(&engine);
            tokio::spawn(async move { engine.confirm(&sym(EURUSD)).await })
        })
        .collect();
    for h in handles {
        let report = h.await.unwrap().unwrap();
        assert_eq!(report.confirmation.signal(), Some(Signal::Sell));
    }
    assert_eq!(ctl.requests().await.len(), 24);
}
