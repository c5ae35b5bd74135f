use proptest::prelude::*;

use confluencia::{Confirmation, ResolveStrategy, Signal, Timeframe, decide};

use crate::helpers::{engine, script_signals, sym};

fn arb_signal() -> impl Strategy<Value = Option<Signal>> {
    prop_oneof![
        Just(None),
        Just(Some(Signal::Buy)),
        Just(Some(Signal::Sell)),
        Just(Some(Signal::Hold)),
    ]
}

fn arb_strategy() -> impl Strategy<Value = ResolveStrategy> {
    prop_oneof![
        Just(ResolveStrategy::Concurrent),
        Just(ResolveStrategy::Sequential),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]
    #[test]
    fn report_follows_the_decision_rule(
        signals in proptest::array::uniform3(arb_signal()),
        strategy in arb_strategy(),
    ) {
        tokio_test::block_on(async move {
            let (engine, ctl) = engine(strategy);
            script_signals(&ctl, "NZDUSD", signals).await;

            let report = engine.confirm(&sym("NZDUSD")).await.unwrap();

            let (expected, rationale) = decide(signals.map(|s| s.unwrap_or(Signal::NONE)));
            assert_eq!(report.confirmation, expected);
            assert_eq!(report.rationale, rationale);
            assert_eq!(
                [report.m1.signal(), report.m5.signal(), report.m15.signal()],
                signals
            );
            if let Confirmation::Confirmed(s) = report.confirmation {
                assert!(signals.iter().all(|x| *x == Some(s)));
                assert_ne!(s, Signal::NONE);
            }
            for (summary, tf) in [
                (&report.m1, Timeframe::M1),
                (&report.m5, Timeframe::M5),
                (&report.m15, Timeframe::M15),
            ] {
                assert_eq!(summary.rationale(), Some(format!("fixture {tf}").as_str()));
            }
        });
    }
}
