//! # Bsm-Curve-Lib: Black-Scholes-Merton Pricing and Call-Curve Sampling
//!
//! `bsm-curve-lib` is a small Rust library for pricing European call and put
//! options under the Black-Scholes-Merton model and for sampling a call-price
//! curve across a swept spot-price range, ready for plotting.
//!
//! ## Core Features
//!
//! - **Point Pricing**: call and put prices from six market inputs (spot,
//!   strike, time to maturity, risk-free rate, dividend yield, volatility)
//! - **Curve Sampling**: call price evaluated over a spot range at a fixed
//!   step, producing ordered (spot, price) pairs
//! - **Validated Inputs**: raw form fields are parsed, converted from display
//!   units (days, percent) and validated before any formula runs
//! - **Typed Failures**: parse and domain violations are distinct error
//!   values, never NaN prices
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_curve_lib::{price_quote, sample_call_curve, PricingInput, SamplingRange};
//!
//! // Canonical units: years and decimal fractions
//! let input = PricingInput::new(100.0, 100.0, 30.0 / 365.0, 0.05, 0.02, 0.2)?;
//!
//! let prices = price_quote(&input);
//! println!("call = {:.2}, put = {:.2}", prices.call, prices.put);
//!
//! // Curve for "Call Option Price vs Stock Price"
//! let curve = sample_call_curve(&input, &SamplingRange::new(90.0, 110.0));
//! assert_eq!(curve.len(), 201);
//! # Ok::<(), bsm_curve_lib::PriceError>(())
//! ```
//!
//! ## Evaluating raw form fields
//!
//! The [`evaluate_fields`] entry point mirrors a UI form: it takes the six
//! fields as text in display units (days, percent), and a failed parse or a
//! degenerate value comes back as a [`PriceError`] the caller can turn into a
//! cleared display via [`report::cleared`].

// ================================================================================================
// MODULES
// ================================================================================================

pub mod curve;
pub mod error;
pub mod inputs;
pub mod models;
pub mod report;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Error taxonomy
pub use error::{PriceError, Result};

// Input parsing and validation
pub use inputs::{PricingInput, RawQuote, DAYS_PER_YEAR};

// Pricing kernel
pub use models::bs::{bs_call_price, bs_put_price, d_terms, norm_cdf, DTerms, PricingResult};

// Curve sampling
pub use curve::{sample_call_curve, SamplingRange, DEFAULT_STEP};

// ================================================================================================
// TOP-LEVEL API
// ================================================================================================

/// Everything a single evaluation produces: the validated input it ran on,
/// the intermediate d1/d2 terms and both prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub input: PricingInput,
    pub terms: DTerms,
    pub prices: PricingResult,
}

/// Price a validated quote at a single point.
///
/// Thin convenience wrapper over [`PricingInput::price`]; both the call and
/// the put are computed from one pass over the d1/d2 terms.
pub fn price_quote(input: &PricingInput) -> PricingResult {
    input.price()
}

/// Full evaluate-on-demand pipeline over raw form fields.
///
/// Parses the six textual fields (display units: days to maturity, percent
/// rate/yield/volatility), converts them to canonical units, validates the
/// result and prices it.
///
/// # Errors
///
/// * [`PriceError::Parse`] if a field is empty or non-numeric — the caller
///   should withhold all output (see [`report::cleared`])
/// * [`PriceError::NonFinite`] / [`PriceError::Domain`] if a value is NaN,
///   infinite, or violates positivity (e.g. zero volatility)
///
/// # Example
///
/// ```rust
/// use bsm_curve_lib::{evaluate_fields, report};
///
/// match evaluate_fields("100", "100", "30", "5", "2", "20") {
///     Ok(eval) => {
///         let (call_line, put_line) = report::price_lines(&eval.prices);
///         println!("{call_line}\n{put_line}");
///     }
///     Err(_) => {
///         let (call_line, put_line) = report::cleared();
///         assert!(call_line.is_empty() && put_line.is_empty());
///     }
/// }
/// ```
pub fn evaluate_fields(
    stock_price: &str,
    strike_price: &str,
    time_to_maturity: &str,
    risk_free_rate: &str,
    dividend_yield: &str,
    volatility: &str,
) -> Result<Evaluation> {
    let raw = RawQuote::parse(
        stock_price,
        strike_price,
        time_to_maturity,
        risk_free_rate,
        dividend_yield,
        volatility,
    )?;
    let input = raw.to_input()?;

    Ok(Evaluation {
        input,
        terms: input.d_terms(),
        prices: input.price(),
    })
}

/// Evaluate a [`RawQuote`] that is already numeric (e.g. deserialized from a
/// scenario file) without going through the textual layer.
pub fn evaluate_quote(raw: &RawQuote) -> Result<Evaluation> {
    let input = raw.to_input()?;
    Ok(Evaluation {
        input,
        terms: input.d_terms(),
        prices: input.price(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_fields_happy_path() {
        let eval = evaluate_fields("100", "100", "30", "5", "2", "20").unwrap();
        assert!((eval.input.years_to_exp - 30.0 / 365.0).abs() < 1e-12);
        assert!(eval.terms.d1 > eval.terms.d2);
        assert!(eval.prices.call > 0.0);
        assert!(eval.prices.put > 0.0);
    }

    #[test]
    fn test_evaluate_fields_parse_failure() {
        assert!(matches!(
            evaluate_fields("100", "100", "", "5", "2", "20"),
            Err(PriceError::Parse {
                field: "time-to-maturity",
                ..
            })
        ));
    }

    #[test]
    fn test_evaluate_quote_matches_fields() {
        let raw = RawQuote {
            stock_price: 100.0,
            strike_price: 100.0,
            days_to_maturity: 30.0,
            risk_free_rate_pct: 5.0,
            dividend_yield_pct: 2.0,
            volatility_pct: 20.0,
        };
        let a = evaluate_quote(&raw).unwrap();
        let b = evaluate_fields("100", "100", "30", "5", "2", "20").unwrap();
        assert_eq!(a.prices, b.prices);
    }
}
