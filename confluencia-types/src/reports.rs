//! Report envelopes produced by the confluence resolver.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfluenciaError;
use crate::market::{Signal, Symbol};

/// Fixed-shape projection of one timeframe's verdict.
///
/// Unlike [`crate::Verdict`], every key is always present. Values are copied
/// from the verdict untouched: a key the verdict lacks becomes `null`, or `[]`
/// for the zone lists, while an explicit `null` stays `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeframeSummary {
    /// Directional label reported for the timeframe.
    #[serde(rename = "señal", default)]
    pub signal: Value,
    /// Free-text explanation from the Analysis Port.
    #[serde(rename = "motivo", default)]
    pub rationale: Value,
    /// Suggested entry price.
    #[serde(rename = "precio_entrada", default)]
    pub entry_price: Value,
    /// Suggested protective stop.
    #[serde(default)]
    pub stop_loss: Value,
    /// Suggested profit target.
    #[serde(default)]
    pub take_profit: Value,
    /// Liquidity zones.
    #[serde(rename = "zonas_liquidez", default)]
    pub liquidity_zones: Value,
    /// Breakout zones (the verdict's order blocks).
    #[serde(rename = "zonas_ruptura", default)]
    pub breakout_zones: Value,
    /// When the underlying verdict was computed, in the port's own format.
    #[serde(rename = "hora", default)]
    pub time: Value,
}

impl TimeframeSummary {
    /// Parsed directional label; unknown labels and `null` read as `None`.
    #[must_use]
    pub fn signal(&self) -> Option<Signal> {
        self.signal.as_str().and_then(|s| s.parse().ok())
    }

    /// Free-text explanation, when it is a string.
    #[must_use]
    pub fn rationale(&self) -> Option<&str> {
        self.rationale.as_str()
    }
}

/// Outcome of the confluence decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Confirmation {
    /// All three timeframes agree on this non-neutral signal.
    Confirmed(Signal),
    /// Disagreement, or unanimous neutral signal.
    NoTrade,
}

impl Confirmation {
    /// Sentinel label used when there is nothing to trade.
    pub const NO_TRADE: &'static str = "NO TRADE";

    /// The confirmed signal, if any.
    #[must_use]
    pub const fn signal(self) -> Option<Signal> {
        match self {
            Self::Confirmed(s) => Some(s),
            Self::NoTrade => None,
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed(s) => f.write_str(s.as_str()),
            Self::NoTrade => f.write_str(Self::NO_TRADE),
        }
    }
}

impl FromStr for Confirmation {
    type Err = ConfluenciaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::NO_TRADE {
            return Ok(Self::NoTrade);
        }
        match s.parse::<Signal>()? {
            sig if sig.is_none() => Err(ConfluenciaError::InvalidArg(format!(
                "'{s}' cannot be a confirmation"
            ))),
            sig => Ok(Self::Confirmed(sig)),
        }
    }
}

impl TryFrom<String> for Confirmation {
    type Error = ConfluenciaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Confirmation> for String {
    fn from(c: Confirmation) -> Self {
        c.to_string()
    }
}

/// Multi-timeframe confluence result for one symbol.
///
/// Serialized keys, in order: `symbol`, `M1`, `M5`, `M15`, `confirmacion`,
/// `motivo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfluenceReport {
    /// Symbol the report was computed for.
    pub symbol: Symbol,
    /// One-minute summary.
    #[serde(rename = "M1")]
    pub m1: TimeframeSummary,
    /// Five-minute summary.
    #[serde(rename = "M5")]
    pub m5: TimeframeSummary,
    /// Fifteen-minute summary.
    #[serde(rename = "M15")]
    pub m15: TimeframeSummary,
    /// Decision across the three timeframes.
    #[serde(rename = "confirmacion")]
    pub confirmation: Confirmation,
    /// Human-readable explanation of the decision.
    #[serde(rename = "motivo")]
    pub rationale: String,
}
