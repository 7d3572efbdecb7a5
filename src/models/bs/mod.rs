// Black-Scholes-Merton pricing kernel: the normal-CDF approximation, the
// d1/d2 terms and the call/put formulas.  Implied-volatility and Greeks are
// intentionally omitted to keep the lightweight focus of bsm-curve-lib.
//
// Callers must supply positive S, K, T and sigma; see `PricingInput` for the
// validating entry point.  The formulas themselves do not special-case
// degenerate parameters.

/// Intermediate d1/d2 terms of the Black-Scholes formula.
///
/// Recomputed on every pricing request; carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DTerms {
    pub d1: f64,
    pub d2: f64,
}

/// Call and put price for a single parameter set.
///
/// Both values are non-negative in exact arithmetic; floating-point rounding
/// can leave deep out-of-the-money prices a hair below zero and they are
/// reported as computed, without clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call: f64,
    pub put: f64,
}

/// Standard normal cumulative distribution function.
///
/// Abramowitz & Stegun 7.1.26 rational-polynomial approximation of erf,
/// absolute error below 7.5e-8.  The constants and evaluation order are kept
/// exactly as in the classical formulation so output is reproducible bit for
/// bit.  Defined for all finite x; for extreme |x| the exponential underflows
/// and the result saturates at 0 or 1.  By construction
/// `norm_cdf(x) + norm_cdf(-x) == 1` exactly.
pub fn norm_cdf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t + a3) * t + a2) * t + a1) * t) * libm::exp(-x * x);

    0.5 * (1.0 + sign * y)
}

/// The d1/d2 terms:
///
/// ```text
/// d1 = [ln(S/K) + (r - q + sigma^2/2) * T] / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
/// ```
#[allow(non_snake_case)]
pub fn d_terms(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> DTerms {
    let sig_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / sig_sqrt_t;
    DTerms {
        d1,
        d2: d1 - sig_sqrt_t,
    }
}

/// Price of a European call option under Black-Scholes-Merton assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    let DTerms { d1, d2 } = d_terms(S, K, r, q, T, sigma);
    S * (-q * T).exp() * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes-Merton assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    let DTerms { d1, d2 } = d_terms(S, K, r, q, T, sigma);
    K * (-r * T).exp() * norm_cdf(-d2) - S * (-q * T).exp() * norm_cdf(-d1)
}
