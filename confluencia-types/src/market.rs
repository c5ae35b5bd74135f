//! Market identifiers: symbols, analysis timeframes and signal labels.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfluenciaError;

/// Currency pair (or any instrument) identifier, normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(pub(crate) String);

impl Symbol {
    /// Build a symbol from user input.
    ///
    /// Surrounding whitespace is trimmed and the result is upper-cased, so
    /// `"eurusd"` and `" EURUSD "` produce the same symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the input is empty after trimming.
    pub fn new(raw: &str) -> Result<Self, ConfluenciaError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfluenciaError::InvalidArg(
                "symbol must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Borrow the normalized symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ConfluenciaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl FromStr for Symbol {
    type Err = ConfluenciaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Candle interval analysed by the Analysis Port.
///
/// The set is closed: the confluence resolver always works over exactly
/// these three, in the order given by [`Timeframe::ALL`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Timeframe {
    /// One-minute candles.
    #[default]
    #[serde(rename = "1min")]
    M1,
    /// Five-minute candles.
    #[serde(rename = "5min")]
    M5,
    /// Fifteen-minute candles.
    #[serde(rename = "15min")]
    M15,
}

impl Timeframe {
    /// Fixed resolution order: shortest interval first.
    pub const ALL: [Self; 3] = [Self::M1, Self::M5, Self::M15];

    /// Interval string understood by the Analysis Port (`"1min"`, ...).
    #[must_use]
    pub const fn as_interval(self) -> &'static str {
        match self {
            Self::M1 => "1min",
            Self::M5 => "5min",
            Self::M15 => "15min",
        }
    }

    /// Key used for this timeframe in confluence reports (`"M1"`, ...).
    #[must_use]
    pub const fn report_key(self) -> &'static str {
        match self {
            Self::M1 => "M1",
            Self::M5 => "M5",
            Self::M15 => "M15",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_interval())
    }
}

impl FromStr for Timeframe {
    type Err = ConfluenciaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1min" => Ok(Self::M1),
            "5min" => Ok(Self::M5),
            "15min" => Ok(Self::M15),
            other => Err(ConfluenciaError::InvalidArg(format!(
                "unsupported timeframe '{other}', expected one of: 1min, 5min, 15min"
            ))),
        }
    }
}

/// Directional label emitted by the Analysis Port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Open or add to a long position.
    Buy,
    /// Open or add to a short position.
    Sell,
    /// Neutral: no action suggested.
    Hold,
}

impl Signal {
    /// The neutral, no-action label.
    pub const NONE: Self = Self::Hold;

    /// Wire label (`"buy"`, `"sell"`, `"hold"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Hold => "hold",
        }
    }

    /// Whether this is the neutral label.
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Signal {
    type Err = ConfluenciaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "hold" => Ok(Self::Hold),
            other => Err(ConfluenciaError::InvalidArg(format!(
                "unknown signal label '{other}'"
            ))),
        }
    }
}
