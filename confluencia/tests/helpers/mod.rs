// Shared builders for router and service tests.
#![allow(dead_code)]

use std::sync::Arc;

use confluencia::{Confluencia, ResolveStrategy, Signal, Symbol, Timeframe, Verdict};
use confluencia_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

pub const EURUSD: &str = "EURUSD";
pub const GBPUSD: &str = "GBPUSD";

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).expect("valid static test symbol")
}

/// Verdict carrying only a signal and a rationale naming the timeframe.
pub fn verdict(signal: Option<Signal>, tf: Timeframe) -> Verdict {
    let v = match signal {
        Some(s) => Verdict::new().with_signal(s),
        None => Verdict::new(),
    };
    v.with(Verdict::RATIONALE, format!("fixture {tf}"))
}

/// Orchestrator over a fresh dynamic mock with the given strategy.
pub fn engine(strategy: ResolveStrategy) -> (Confluencia, DynamicMockController) {
    let (connector, controller) = DynamicMockConnector::new_with_controller("dyn");
    let engine = Confluencia::builder()
        .with_connector(connector)
        .resolve_strategy(strategy)
        .build()
        .expect("connector registered");
    (engine, controller)
}

/// Script `symbol` so that M1, M5 and M15 return the given signals.
pub async fn script_signals(
    controller: &DynamicMockController,
    symbol: &str,
    signals: [Option<Signal>; 3],
) {
    for (tf, signal) in Timeframe::ALL.into_iter().zip(signals) {
        controller
            .set_behavior(sym(symbol), tf, MockBehavior::Return(verdict(signal, tf)))
            .await;
    }
}

/// Orchestrator over the static fixture connector.
pub fn fixture_engine() -> Arc<Confluencia> {
    Arc::new(
        Confluencia::builder()
            .with_connector(Arc::new(confluencia_mock::MockConnector::new()))
            .build()
            .expect("connector registered"),
    )
}
