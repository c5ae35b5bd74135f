use confluencia_types::{Confirmation, Signal};

/// Rationale attached to a confirmed confluence.
pub const CONFLUENCE_DETECTED: &str =
    "Confluencia institucional detectada en todas las temporalidades";

/// Rationale attached to every `NO TRADE` outcome.
pub const NO_CONFLUENCE: &str = "No hay confirmación institucional multi-timeframe";

/// Reduce the signals of the three fixed timeframes (M1, M5, M15) to one
/// confirmation and its rationale.
///
/// The signal is confirmed only when all three are equal and not
/// [`Signal::NONE`]. Disagreement of any kind, and unanimous neutrality,
/// both yield [`Confirmation::NoTrade`]. A missing signal must be passed as
/// [`Signal::NONE`].
#[must_use]
pub fn decide(signals: [Signal; 3]) -> (Confirmation, &'static str) {
    let [m1, m5, m15] = signals;
    if m1 == m5 && m5 == m15 && !m1.is_none() {
        (Confirmation::Confirmed(m1), CONFLUENCE_DETECTED)
    } else {
        (Confirmation::NoTrade, NO_CONFLUENCE)
    }
}
