use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::signal::{Signal, classify};

/// One point of an instrument's price history. A missing or null price
/// leaves a gap in the chart instead of rejecting the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// One constituent of an ETF basket.
///
/// Every numeric field may be absent in the snapshot; absent values are
/// treated as zero by the derived computations, never as an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Holding {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub ema100: Option<Decimal>,
    #[serde(default)]
    pub ema200: Option<Decimal>,
    #[serde(default)]
    pub high52: Option<Decimal>,
    #[serde(default)]
    pub low52: Option<Decimal>,
}

impl Holding {
    /// Classify this holding against its 100/200-day EMAs
    pub fn signal(&self) -> Signal {
        classify(
            or_zero(self.price),
            or_zero(self.ema100),
            or_zero(self.ema200),
        )
    }
}

/// One exchange-traded fund as delivered by the static snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Instrument {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Daily change in percent, signed
    #[serde(default)]
    pub change: Option<Decimal>,
    /// Trailing compound annual growth rate in percent
    #[serde(default)]
    pub cagr: Option<Decimal>,
    #[serde(default)]
    pub low52: Option<Decimal>,
    #[serde(default)]
    pub high52: Option<Decimal>,
    #[serde(default)]
    pub history: Vec<PricePoint>,
    #[serde(default)]
    pub constituents: Vec<Holding>,
    #[serde(default)]
    pub desc: String,
}

impl Instrument {
    pub fn price_or_zero(&self) -> Decimal {
        or_zero(self.price)
    }

    pub fn change_or_zero(&self) -> Decimal {
        or_zero(self.change)
    }

    pub fn is_gaining(&self) -> bool {
        self.change_or_zero() >= Decimal::ZERO
    }
}

/// Entry of the scrolling ticker tape. Carried through untouched for the
/// marquee renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickerEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub change: Option<Decimal>,
}

/// Immutable market snapshot loaded once at startup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub instruments: Vec<Instrument>,
    pub ticker_tape: Vec<TickerEntry>,
}

impl Snapshot {
    pub fn new(instruments: Vec<Instrument>, ticker_tape: Vec<TickerEntry>) -> Self {
        Self {
            instruments,
            ticker_tape,
        }
    }
}

pub(crate) fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}
