//! Buy/hold/sell classification of a price against two moving averages.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Margin over EMA100 above which a price counts as overextended
pub const SELL_MARGIN_EMA100: Decimal = dec!(1.05);
/// Margin over EMA200 above which a price counts as overextended
pub const SELL_MARGIN_EMA200: Decimal = dec!(1.08);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalLabel {
    StrongBuy,
    Sell,
    Hold,
}

impl fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "STRONG BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

/// Display hint attached to a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Danger,
    Neutral,
}

/// Which classification rule produced the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalBasis {
    /// Price or one of the averages is missing or zero
    InsufficientData,
    BelowAverages,
    Overextended,
    WithinRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signal {
    pub label: SignalLabel,
    pub severity: Severity,
    pub basis: SignalBasis,
}

impl Signal {
    const fn new(label: SignalLabel, severity: Severity, basis: SignalBasis) -> Self {
        Self {
            label,
            severity,
            basis,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.label != SignalLabel::Hold
    }
}

/// Classify `price` against its 100-day and 200-day EMAs.
///
/// Rules are evaluated in order and the first match wins:
/// 1. any input is zero: `HOLD` (insufficient data)
/// 2. price strictly below both averages: `STRONG BUY`
/// 3. price above EMA100 by more than 5% and above EMA200 by more than 8%: `SELL`
/// 4. otherwise `HOLD`
///
/// Negative inputs are not validated.
pub fn classify(price: Decimal, ema100: Decimal, ema200: Decimal) -> Signal {
    if price.is_zero() || ema100.is_zero() || ema200.is_zero() {
        return Signal::new(
            SignalLabel::Hold,
            Severity::Neutral,
            SignalBasis::InsufficientData,
        );
    }

    if price < ema100 && price < ema200 {
        return Signal::new(
            SignalLabel::StrongBuy,
            Severity::Success,
            SignalBasis::BelowAverages,
        );
    }

    if above_margin(price, ema100, SELL_MARGIN_EMA100)
        && above_margin(price, ema200, SELL_MARGIN_EMA200)
    {
        return Signal::new(SignalLabel::Sell, Severity::Danger, SignalBasis::Overextended);
    }

    Signal::new(SignalLabel::Hold, Severity::Neutral, SignalBasis::WithinRange)
}

/// A limit that overflows `Decimal` cannot be exceeded.
fn above_margin(price: Decimal, base: Decimal, margin: Decimal) -> bool {
    base.checked_mul(margin).is_some_and(|limit| price > limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_baseline_holds() {
        let signal = classify(dec!(100), dec!(0), dec!(0));
        assert_eq!(signal.label, SignalLabel::Hold);
        assert_eq!(signal.basis, SignalBasis::InsufficientData);
        assert_eq!(signal.severity, Severity::Neutral);
    }

    #[test]
    fn test_zero_price_holds_even_below_averages() {
        let signal = classify(dec!(0), dec!(100), dec!(110));
        assert_eq!(signal.basis, SignalBasis::InsufficientData);
    }

    #[test]
    fn test_below_both_averages_is_strong_buy() {
        let signal = classify(dec!(90), dec!(100), dec!(110));
        assert_eq!(signal.label, SignalLabel::StrongBuy);
        assert_eq!(signal.severity, Severity::Success);
    }

    #[test]
    fn test_below_only_one_average_holds() {
        let signal = classify(dec!(105), dec!(100), dec!(110));
        assert_eq!(signal.label, SignalLabel::Hold);
        assert_eq!(signal.basis, SignalBasis::WithinRange);
    }

    #[test]
    fn test_equal_to_averages_is_not_strong_buy() {
        // No tolerance: the price must be strictly below both
        assert_eq!(classify(dec!(100), dec!(100), dec!(100)).label, SignalLabel::Hold);
    }

    #[test]
    fn test_overextended_is_sell() {
        let signal = classify(dec!(116), dec!(100), dec!(100));
        assert_eq!(signal.label, SignalLabel::Sell);
        assert_eq!(signal.severity, Severity::Danger);
    }

    #[test]
    fn test_sell_needs_both_margins() {
        // 6% over EMA100 passes the 5% margin, fails the 8% one on EMA200
        assert_eq!(classify(dec!(106), dec!(100), dec!(100)).label, SignalLabel::Hold);
        // 9% over EMA200 but only 3% over EMA100
        assert_eq!(classify(dec!(109), dec!(106), dec!(100)).label, SignalLabel::Hold);
    }

    #[test]
    fn test_sell_margins_are_strict() {
        assert_eq!(classify(dec!(108), dec!(100), dec!(100)).label, SignalLabel::Hold);
        assert_eq!(classify(dec!(108.01), dec!(100), dec!(100)).label, SignalLabel::Sell);
        assert_eq!(classify(dec!(105), dec!(100), dec!(90)).label, SignalLabel::Hold);
        assert_eq!(classify(dec!(105.01), dec!(100), dec!(90)).label, SignalLabel::Sell);
    }

    #[test]
    fn test_negative_inputs_do_not_panic() {
        let signal = classify(dec!(-5), dec!(-10), dec!(3));
        assert!(matches!(
            signal.label,
            SignalLabel::StrongBuy | SignalLabel::Sell | SignalLabel::Hold
        ));
    }

    #[test]
    fn test_overflowing_margin_does_not_panic() {
        let signal = classify(Decimal::MAX, dec!(1), Decimal::MAX);
        assert_eq!(signal.label, SignalLabel::Hold);
        assert_eq!(signal.basis, SignalBasis::WithinRange);

        let signal = classify(Decimal::MAX, Decimal::MAX, Decimal::MAX);
        assert_eq!(signal.label, SignalLabel::Hold);

        let signal = classify(Decimal::MAX, dec!(1), dec!(1));
        assert_eq!(signal.label, SignalLabel::Sell);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SignalLabel::StrongBuy.to_string(), "STRONG BUY");
        assert_eq!(SignalLabel::Sell.to_string(), "SELL");
        assert_eq!(SignalLabel::Hold.to_string(), "HOLD");
    }

    #[test]
    fn test_is_actionable() {
        assert!(classify(dec!(90), dec!(100), dec!(110)).is_actionable());
        assert!(!classify(dec!(100), dec!(0), dec!(0)).is_actionable());
    }
}
