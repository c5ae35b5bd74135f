//! The Analysis Port's per-call verdict record.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::market::Signal;

/// Verdict computed by the Analysis Port for one (symbol, timeframe) pair.
///
/// The record is kept exactly as the port produced it: key order, explicit
/// `null`s, unknown keys and field formats all survive a round trip. Typed
/// views are read on demand through lenient accessors that never fail; a value
/// of an unexpected shape reads as `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verdict {
    raw: Map<String, Value>,
}

impl Verdict {
    /// Key of the directional label.
    pub const SIGNAL: &'static str = "señal";
    /// Key of the free-text explanation.
    pub const RATIONALE: &'static str = "motivo";
    /// Key of the suggested entry price.
    pub const ENTRY_PRICE: &'static str = "precio_entrada";
    /// Key of the protective stop.
    pub const STOP_LOSS: &'static str = "stop_loss";
    /// Key of the profit target.
    pub const TAKE_PROFIT: &'static str = "take_profit";
    /// Key of the liquidity zone list.
    pub const LIQUIDITY_ZONES: &'static str = "zonas_liquidez";
    /// Key of the order block list.
    pub const ORDER_BLOCKS: &'static str = "order_blocks";
    /// Key of the computation time.
    pub const TIMESTAMP: &'static str = "timestamp";

    /// Empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used by connectors assembling a record.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.raw.insert(key.into(), value.into());
        self
    }

    /// Builder-style insert of the directional label.
    #[must_use]
    pub fn with_signal(self, signal: Signal) -> Self {
        self.with(Self::SIGNAL, signal.as_str())
    }

    /// Raw value under `key`. `Some(Value::Null)` means the port sent an
    /// explicit `null`; `None` means the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Borrow the raw record.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Take the raw record.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.raw
    }

    /// Directional label, if present and one of `buy`, `sell`, `hold`.
    #[must_use]
    pub fn signal(&self) -> Option<Signal> {
        self.str_at(Self::SIGNAL).and_then(|s| s.parse().ok())
    }

    /// Free-text explanation.
    #[must_use]
    pub fn rationale(&self) -> Option<&str> {
        self.str_at(Self::RATIONALE)
    }

    /// Suggested entry price, from a JSON number or numeric string.
    #[must_use]
    pub fn entry_price(&self) -> Option<Decimal> {
        self.decimal_at(Self::ENTRY_PRICE)
    }

    /// Suggested protective stop.
    #[must_use]
    pub fn stop_loss(&self) -> Option<Decimal> {
        self.decimal_at(Self::STOP_LOSS)
    }

    /// Suggested profit target.
    #[must_use]
    pub fn take_profit(&self) -> Option<Decimal> {
        self.decimal_at(Self::TAKE_PROFIT)
    }

    /// Liquidity zones; empty when absent or not a list.
    #[must_use]
    pub fn liquidity_zones(&self) -> &[Value] {
        self.list_at(Self::LIQUIDITY_ZONES)
    }

    /// Order blocks; empty when absent or not a list.
    #[must_use]
    pub fn order_blocks(&self) -> &[Value] {
        self.list_at(Self::ORDER_BLOCKS)
    }

    /// Computation time as sent by the port, in whatever format it used.
    #[must_use]
    pub fn timestamp(&self) -> Option<&Value> {
        self.raw.get(Self::TIMESTAMP).filter(|v| !v.is_null())
    }

    /// Computation time parsed as UTC.
    ///
    /// Accepts RFC 3339 (any offset) and naive `YYYY-MM-DD HH:MM:SS` or
    /// `YYYY-MM-DDTHH:MM:SS`, which are taken as UTC.
    #[must_use]
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.str_at(Self::TIMESTAMP)?.trim();
        if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
            return Some(t.with_timezone(&Utc));
        }
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    fn str_at(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }

    fn decimal_at(&self, key: &str) -> Option<Decimal> {
        let text = match self.raw.get(key)? {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.trim().to_string(),
            _ => return None,
        };
        text.parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_scientific(&text).ok())
    }

    fn list_at(&self, key: &str) -> &[Value] {
        self.raw
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Verdict {
    fn from(raw: Map<String, Value>) -> Self {
        Self { raw }
    }
}
