use confluencia_core::{Signal, Timeframe, Verdict};
use rust_decimal::Decimal;
use serde_json::json;

/// Fixture verdict for a symbol on a timeframe; `None` means unknown symbol.
pub fn by_symbol(s: &str, tf: Timeframe) -> Option<Verdict> {
    match s {
        "EURUSD" => Some(full(Signal::Buy, tf, 10_850, 10_820, 10_910)),
        "GBPUSD" => {
            let signal = match tf {
                Timeframe::M5 => Signal::Sell,
                Timeframe::M1 | Timeframe::M15 => Signal::Buy,
            };
            Some(full(signal, tf, 12_640, 12_600, 12_720))
        }
        // Explicit nulls and a zone-less timestamp, as some upstream feeds send.
        "USDJPY" => Some(
            Verdict::new()
                .with_signal(Signal::Hold)
                .with(
                    Verdict::RATIONALE,
                    "Precio en rango, sin barrida de liquidez",
                )
                .with(Verdict::STOP_LOSS, json!(null))
                .with(Verdict::TAKE_PROFIT, json!(null))
                .with(Verdict::TIMESTAMP, format!("2024-05-06 {}", clock(tf))),
        ),
        // Sparse verdicts: prices, zones and timestamps missing; no signal on M5.
        "AUDUSD" => Some(match tf {
            Timeframe::M5 => Verdict::default(),
            Timeframe::M1 | Timeframe::M15 => Verdict::new().with_signal(Signal::Buy),
        }),
        _ => None,
    }
}

fn full(signal: Signal, tf: Timeframe, entry: i64, stop: i64, target: i64) -> Verdict {
    let price = |units: i64| json!(Decimal::new(units, 4).to_string());
    Verdict::new()
        .with_signal(signal)
        .with(
            Verdict::RATIONALE,
            format!(
                "Barrida de liquidez y order block {} en {tf}",
                match signal {
                    Signal::Buy => "alcista",
                    Signal::Sell => "bajista",
                    Signal::Hold => "neutral",
                }
            ),
        )
        .with(Verdict::ENTRY_PRICE, price(entry))
        .with(Verdict::STOP_LOSS, price(stop))
        .with(Verdict::TAKE_PROFIT, price(target))
        .with(
            Verdict::LIQUIDITY_ZONES,
            json!([{ "tipo": "sell_side", "precio": price(stop - 10) }]),
        )
        .with(
            Verdict::ORDER_BLOCKS,
            json!([{
                "tipo": if signal == Signal::Sell { "bajista" } else { "alcista" },
                "desde": price(entry - 15),
                "hasta": price(entry + 5),
            }]),
        )
        .with(Verdict::TIMESTAMP, format!("2024-05-06T{}Z", clock(tf)))
}

fn clock(tf: Timeframe) -> &'static str {
    match tf {
        Timeframe::M1 => "14:30:00",
        Timeframe::M5 => "14:31:00",
        Timeframe::M15 => "14:32:00",
    }
}
