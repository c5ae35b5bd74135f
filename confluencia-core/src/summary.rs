use confluencia_types::{Timeframe, TimeframeSummary, Verdict};
use serde_json::Value;

/// Project a raw verdict into the fixed-shape summary for `timeframe`.
///
/// Total over every verdict: values are copied as-is, an absent scalar becomes
/// `null` and an absent zone list becomes `[]`. An explicit `null` from the
/// port is kept. Order blocks are reported as breakout zones.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "confluencia::summary::summarize",
        level = "trace",
        skip(verdict),
        fields(timeframe = %timeframe),
    )
)]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
#[must_use]
pub fn summarize(verdict: &Verdict, timeframe: Timeframe) -> TimeframeSummary {
    let scalar = |key: &str| verdict.get(key).cloned().unwrap_or(Value::Null);
    let zones = |key: &str| {
        verdict
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    };
    TimeframeSummary {
        signal: scalar(Verdict::SIGNAL),
        rationale: scalar(Verdict::RATIONALE),
        entry_price: scalar(Verdict::ENTRY_PRICE),
        stop_loss: scalar(Verdict::STOP_LOSS),
        take_profit: scalar(Verdict::TAKE_PROFIT),
        liquidity_zones: zones(Verdict::LIQUIDITY_ZONES),
        breakout_zones: zones(Verdict::ORDER_BLOCKS),
        time: scalar(Verdict::TIMESTAMP),
    }
}
