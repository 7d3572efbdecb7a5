//! Raw quote parsing, unit conversion and validated pricing inputs.
//!
//! The UI side of the system hands over six fields in display units: prices in
//! currency, time to maturity in days, rate/yield/volatility in percent. This
//! module parses those fields, converts them to the canonical units the pricing
//! formulas expect (years, decimal fractions) and validates the result so the
//! engine never sees a degenerate parameter set.

use crate::error::{PriceError, Result};
use crate::models::bs::{self, DTerms, PricingResult};

/// Day-count used to convert the UI's day field to years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// A quote exactly as the front-end supplies it, in display units.
///
/// `days_to_maturity` is in calendar days; `risk_free_rate_pct`,
/// `dividend_yield_pct` and `volatility_pct` are percentages (e.g. 20 for 20%).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawQuote {
    pub stock_price: f64,
    pub strike_price: f64,
    pub days_to_maturity: f64,
    pub risk_free_rate_pct: f64,
    pub dividend_yield_pct: f64,
    pub volatility_pct: f64,
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| PriceError::Parse {
        field,
        value: raw.to_string(),
    })
}

impl RawQuote {
    /// Parses the six textual form fields into a `RawQuote`.
    ///
    /// Field identifiers in the returned [`PriceError::Parse`] match the input
    /// names of the original form, so a caller can map a failure back to the
    /// field that caused it. An empty field is a parse failure like any other.
    pub fn parse(
        stock_price: &str,
        strike_price: &str,
        time_to_maturity: &str,
        risk_free_rate: &str,
        dividend_yield: &str,
        volatility: &str,
    ) -> Result<Self> {
        Ok(Self {
            stock_price: parse_field("stock-price", stock_price)?,
            strike_price: parse_field("strike-price", strike_price)?,
            days_to_maturity: parse_field("time-to-maturity", time_to_maturity)?,
            risk_free_rate_pct: parse_field("risk-free-rate", risk_free_rate)?,
            dividend_yield_pct: parse_field("dividend-yield", dividend_yield)?,
            volatility_pct: parse_field("volatility", volatility)?,
        })
    }

    /// Converts display units to canonical units and validates the result.
    pub fn to_input(&self) -> Result<PricingInput> {
        PricingInput::new(
            self.stock_price,
            self.strike_price,
            self.days_to_maturity / DAYS_PER_YEAR,
            self.risk_free_rate_pct / 100.0,
            self.dividend_yield_pct / 100.0,
            self.volatility_pct / 100.0,
        )
    }
}

/// Helper function to validate pricing inputs for finiteness and domain constraints.
fn validate_input(spot: f64, strike: f64, t: f64, r: f64, q: f64, vol: f64) -> Result<()> {
    for (name, value) in [
        ("spot", spot),
        ("strike", strike),
        ("years_to_exp", t),
        ("risk_free_rate", r),
        ("dividend_yield", q),
        ("volatility", vol),
    ] {
        if !value.is_finite() {
            return Err(PriceError::NonFinite { name, value });
        }
    }
    // Zero or negative values here would push a division by zero or a log of a
    // non-positive number into d1/d2, so they are rejected up front.
    for (name, value) in [
        ("spot", spot),
        ("strike", strike),
        ("years_to_exp", t),
        ("volatility", vol),
    ] {
        if value <= 0.0 {
            return Err(PriceError::Domain { name, value });
        }
    }
    Ok(())
}

/// A validated parameter set in canonical units (years, decimal fractions).
///
/// Constructed only through [`PricingInput::new`] or [`RawQuote::to_input`];
/// every instance satisfies the domain constraints the formulas in
/// [`crate::models::bs`] require (positive spot/strike/time/volatility, finite
/// rate and yield of either sign).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInput {
    /// Current underlying price (currency units)
    pub spot: f64,
    /// Strike price (currency units)
    pub strike: f64,
    /// Time to expiration (years)
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate (decimal, may be negative)
    pub risk_free_rate: f64,
    /// Continuous dividend yield (decimal, may be negative)
    pub dividend_yield: f64,
    /// Volatility (decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
}

impl PricingInput {
    /// Creates a new pricing input with validation.
    pub fn new(spot: f64, strike: f64, t: f64, r: f64, q: f64, vol: f64) -> Result<Self> {
        validate_input(spot, strike, t, r, q, vol)?;

        Ok(Self {
            spot,
            strike,
            years_to_exp: t,
            risk_free_rate: r,
            dividend_yield: q,
            volatility: vol,
        })
    }

    /// Validates the current parameter set.
    pub fn validate(&self) -> Result<()> {
        validate_input(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.risk_free_rate,
            self.dividend_yield,
            self.volatility,
        )
    }

    /// The intermediate d1/d2 terms for this input.
    pub fn d_terms(&self) -> DTerms {
        bs::d_terms(
            self.spot,
            self.strike,
            self.risk_free_rate,
            self.dividend_yield,
            self.years_to_exp,
            self.volatility,
        )
    }

    /// European call price for this input.
    pub fn call_price(&self) -> f64 {
        bs::bs_call_price(
            self.spot,
            self.strike,
            self.risk_free_rate,
            self.dividend_yield,
            self.years_to_exp,
            self.volatility,
        )
    }

    /// European put price for this input.
    pub fn put_price(&self) -> f64 {
        bs::bs_put_price(
            self.spot,
            self.strike,
            self.risk_free_rate,
            self.dividend_yield,
            self.years_to_exp,
            self.volatility,
        )
    }

    /// Both prices in one shot.
    pub fn price(&self) -> PricingResult {
        PricingResult {
            call: self.call_price(),
            put: self.put_price(),
        }
    }

    /// A copy of this input with the spot price replaced.
    ///
    /// Used by the curve sampler; the replacement spot must be > 0.
    pub(crate) fn with_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }
}
