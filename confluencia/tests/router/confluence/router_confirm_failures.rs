use std::time::Duration;

use confluencia::{ConfluenciaError, ResolveStrategy, Signal, Timeframe};
use confluencia_mock::MockBehavior;

use crate::helpers::{EURUSD, engine, sym, verdict};

#[tokio::test]
async fn one_failed_timeframe_fails_the_request_unchanged() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    let err = ConfluenciaError::connector("dyn", "upstream 503");
    ctl.set_behavior(
        sym(EURUSD),
        Timeframe::M1,
        MockBehavior::Return(verdict(Some(Signal::Buy), Timeframe::M1)),
    )
    .await;
    ctl.set_behavior(sym(EURUSD), Timeframe::M5, MockBehavior::Fail(err.clone()))
        .await;
    ctl.set_behavior(
        sym(EURUSD),
        Timeframe::M15,
        MockBehavior::Return(verdict(Some(Signal::Buy), Timeframe::M15)),
    )
    .await;

    let got = engine.confirm(&sym(EURUSD)).await.unwrap_err();
    assert_eq!(got, err);
}

#[tokio::test]
async fn failure_does_not_wait_for_stalled_timeframes() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    let err = ConfluenciaError::Other("boom".into());
    ctl.set_behavior(sym(EURUSD), Timeframe::M1, MockBehavior::Hang)
        .await;
    ctl.set_behavior(sym(EURUSD), Timeframe::M5, MockBehavior::Fail(err.clone()))
        .await;
    ctl.set_behavior(sym(EURUSD), Timeframe::M15, MockBehavior::Hang)
        .await;

    let got = tokio::time::timeout(Duration::from_secs(5), engine.confirm(&sym(EURUSD)))
        .await
        .expect("resolver returned while siblings were still pending");
    assert_eq!(got.unwrap_err(), err);

    // stalled calls were dropped; only the failing one ran to completion
    assert_eq!(ctl.completed_calls().await, 1);
}

#[tokio::test]
async fn sequential_stops_at_first_failure() {
    let (engine, ctl) = engine(ResolveStrategy::Sequential);
    ctl.set_behavior(
        sym(EURUSD),
        Timeframe::M1,
        MockBehavior::Fail(ConfluenciaError::not_found("analysis for EURUSD@1min")),
    )
    .await;

    let got = engine.confirm(&sym(EURUSD)).await.unwrap_err();
    assert!(matches!(got, ConfluenciaError::NotFound { .. }));

    let reqs = ctl.requests().await;
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].timeframe, Timeframe::M1);
}

#[tokio::test]
async fn unknown_symbol_propagates_not_found() {
    let (engine, _ctl) = engine(ResolveStrategy::Concurrent);
    let got = engine.confirm(&sym("XAUUSD")).await.unwrap_err();
    assert!(matches!(got, ConfluenciaError::NotFound { .. }));
}
