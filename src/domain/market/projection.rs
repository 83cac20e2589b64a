//! Compounded growth projection used by the SIP calculator.

use serde::{Deserialize, Serialize};

/// Rate used when the instrument carries no CAGR
pub const DEFAULT_ANNUAL_RATE_PCT: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Compounded value, rounded to whole currency units
    pub future_value: f64,
    pub profit: f64,
}

/// Compound `principal` at `annual_rate_pct` percent per year for `years`.
///
/// No clamping is applied; zero or negative inputs follow the same formula.
pub fn project(principal: f64, annual_rate_pct: f64, years: f64) -> Projection {
    let growth = (1.0 + annual_rate_pct / 100.0).powf(years);
    let future_value = round_half_up(principal * growth);

    Projection {
        future_value,
        profit: future_value - principal,
    }
}

// Halves round toward positive infinity
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_years_at_twelve_percent() {
        let p = project(100_000.0, 12.0, 5.0);
        assert_eq!(p.future_value, 176_234.0);
        assert_eq!(p.profit, 76_234.0);
    }

    #[test]
    fn test_zero_rate_keeps_principal() {
        let p = project(100_000.0, 0.0, 5.0);
        assert_eq!(p.future_value, 100_000.0);
        assert_eq!(p.profit, 0.0);
    }

    #[test]
    fn test_zero_years_keeps_principal() {
        let p = project(25_000.0, 18.5, 0.0);
        assert_eq!(p.future_value, 25_000.0);
        assert_eq!(p.profit, 0.0);
    }

    #[test]
    fn test_negative_rate_loses_value() {
        let p = project(10_000.0, -10.0, 2.0);
        assert_eq!(p.future_value, 8_100.0);
        assert_eq!(p.profit, -1_900.0);
    }

    #[test]
    fn test_negative_principal_is_not_special_cased() {
        let p = project(-1_000.0, 10.0, 1.0);
        assert_eq!(p.future_value, -1_100.0);
        assert_eq!(p.profit, -100.0);
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(project(1_000.0, 12.345, 1.0).future_value, 1_123.0);
        assert_eq!(project(1_000.0, 12.355, 1.0).future_value, 1_124.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4), 2.0);
    }
}
