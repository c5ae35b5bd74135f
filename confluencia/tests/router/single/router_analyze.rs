use confluencia::{ResolveStrategy, Signal, Symbol, Timeframe, Verdict};
use confluencia_mock::MockBehavior;
use serde_json::{Value, json};

use crate::helpers::{EURUSD, engine, sym};

#[tokio::test]
async fn verdict_is_returned_unmodified() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    let raw = r#"{"tendencia":"bajista","señal":"sell","motivo":"order block bajista","precio_entrada":1.2345,"stop_loss":null,"order_blocks":[{"hasta":1.24,"desde":1.23}],"volumen":1200,"timestamp":"2024-05-06T14:30:00+02:00"}"#;
    let verdict: Verdict = serde_json::from_str(raw).unwrap();
    ctl.set_behavior(sym(EURUSD), Timeframe::M15, MockBehavior::Return(verdict))
        .await;

    let got = engine.analyze(&sym(EURUSD), Timeframe::M15).await.unwrap();
    assert_eq!(serde_json::to_string(&got).unwrap(), raw);
    assert_eq!(got.get("stop_loss"), Some(&Value::Null));
    assert!(got.get("take_profit").is_none());
    assert!(got.get("zonas_ruptura").is_none());
}

#[tokio::test]
async fn naive_timestamp_does_not_fail_the_call() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    let verdict: Verdict =
        serde_json::from_str(r#"{"señal":"buy","timestamp":"2024-05-06 14:30:00"}"#).unwrap();
    ctl.set_behavior(sym(EURUSD), Timeframe::M1, MockBehavior::Return(verdict))
        .await;

    let got = engine.analyze(&sym(EURUSD), Timeframe::M1).await.unwrap();
    assert_eq!(got.timestamp(), Some(&json!("2024-05-06 14:30:00")));
    assert_eq!(got.signal(), Some(Signal::Buy));
}

#[tokio::test]
async fn one_call_with_requested_timeframe() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    ctl.set_behavior(
        sym("GBPUSD"),
        Timeframe::M5,
        MockBehavior::Return(Verdict::new().with_signal(Signal::Buy)),
    )
    .await;

    let got = engine.analyze(&sym("gbpusd"), Timeframe::M5).await.unwrap();
    assert_eq!(got.signal(), Some(Signal::Buy));

    let reqs = ctl.requests().await;
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].symbol, Symbol::new("GBPUSD").unwrap());
    assert_eq!(reqs[0].timeframe, Timeframe::M5);
    assert_eq!(reqs[0].api_key.expose(), "demo");
}

#[tokio::test]
async fn default_symbol_is_used_when_none_given() {
    let (engine, ctl) = engine(ResolveStrategy::Concurrent);
    ctl.set_behavior(
        sym(EURUSD),
        Timeframe::M1,
        MockBehavior::Return(Verdict::default()),
    )
    .await;

    engine.analyze_default(Timeframe::default()).await.unwrap();
    let reqs = ctl.requests().await;
    assert_eq!(reqs[0].symbol.as_str(), EURUSD);
    assert_eq!(reqs[0].timeframe, Timeframe::M1);
}

#[tokio::test]
async fn errors_pass_through() {
    let (engine, _ctl) = engine(ResolveStrategy::Concurrent);
    let err = engine.analyze(&sym("XAUUSD"), Timeframe::M1).await.unwrap_err();
    assert!(matches!(err, confluencia::ConfluenciaError::NotFound { .. }));
}
