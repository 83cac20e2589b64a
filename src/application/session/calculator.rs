use crate::domain::market::instrument::Instrument;
use crate::domain::market::projection::{DEFAULT_ANNUAL_RATE_PCT, Projection, project};
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

pub const DEFAULT_PRINCIPAL: f64 = 100_000.0;
pub const DEFAULT_YEARS: f64 = 5.0;

// Slider constraints of the calculator inputs
pub const PRINCIPAL_MIN: f64 = 5_000.0;
pub const PRINCIPAL_MAX: f64 = 1_000_000.0;
pub const PRINCIPAL_STEP: f64 = 5_000.0;
pub const YEARS_MIN: f64 = 1.0;
pub const YEARS_MAX: f64 = 20.0;
pub const YEARS_STEP: f64 = 1.0;

/// Ephemeral calculator inputs, reset whenever a calculator is entered
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInput {
    principal: f64,
    years: f64,
    rate_instrument_id: String,
}

impl CalculatorInput {
    pub fn new(rate_instrument_id: impl Into<String>) -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            years: DEFAULT_YEARS,
            rate_instrument_id: rate_instrument_id.into(),
        }
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn years(&self) -> f64 {
        self.years
    }

    pub fn rate_instrument_id(&self) -> &str {
        &self.rate_instrument_id
    }

    pub fn reset(&mut self, rate_instrument_id: impl Into<String>) {
        *self = Self::new(rate_instrument_id);
    }

    pub fn set_rate_instrument(&mut self, id: impl Into<String>) {
        self.rate_instrument_id = id.into();
    }

    /// Set the principal, snapped to the slider range and step
    pub fn set_principal(&mut self, principal: f64) {
        match snap(principal, PRINCIPAL_MIN, PRINCIPAL_MAX, PRINCIPAL_STEP) {
            Some(value) => self.principal = value,
            None => debug!("Calculator: ignoring principal {}", principal),
        }
    }

    /// Set the duration, snapped to the slider range and step
    pub fn set_years(&mut self, years: f64) {
        match snap(years, YEARS_MIN, YEARS_MAX, YEARS_STEP) {
            Some(value) => self.years = value,
            None => debug!("Calculator: ignoring years {}", years),
        }
    }

    pub fn project(&self, annual_rate_pct: f64) -> Projection {
        project(self.principal, annual_rate_pct, self.years)
    }
}

/// Projection rate for an instrument: its CAGR, or the default rate
pub fn rate_for(instrument: Option<&Instrument>) -> f64 {
    instrument
        .and_then(|etf| etf.cagr)
        .and_then(|cagr| cagr.to_f64())
        .unwrap_or(DEFAULT_ANNUAL_RATE_PCT)
}

fn snap(value: f64, min: f64, max: f64, step: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let stepped = min + ((value - min) / step).round() * step;
    Some(stepped.clamp(min, max))
}
