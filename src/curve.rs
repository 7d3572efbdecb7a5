//! Call-price curve sampling across a swept spot-price range.
//!
//! The sampler holds every quote parameter fixed except the spot price, which
//! is swept from `from` to `to` at a fixed step, producing the (spot, call)
//! point sequence a front-end plots as "Call Option Price vs Stock Price".

use crate::inputs::PricingInput;

/// Step between consecutive spot samples, matching the reference behaviour.
pub const DEFAULT_STEP: f64 = 0.1;

/// The spot-price interval to sample, inclusive of both ends when they align
/// with the step grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingRange {
    pub from: f64,
    pub to: f64,
    pub step: f64,
}

impl SamplingRange {
    /// Range with the default 0.1 step.
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            step: DEFAULT_STEP,
        }
    }

    /// Range with an explicit step.
    pub fn with_step(from: f64, to: f64, step: f64) -> Self {
        Self { from, to, step }
    }

    /// Number of points the sweep will produce: `floor((to - from)/step) + 1`
    /// when `to >= from`, else 0.
    pub fn len(&self) -> usize {
        if !(self.from <= self.to) || !(self.step > 0.0) || !self.step.is_finite() {
            return 0;
        }
        // A naive floor misses the last grid point when the division lands a
        // few ulps short (e.g. 20.0 / 0.1 < 200), hence the slack.
        ((self.to - self.from) / self.step + 1e-9).floor() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Samples the call price over `range`, substituting each swept spot for the
/// quote's own spot price and keeping every other parameter fixed.
///
/// Spot values are generated as `from + i * step` rather than by repeated
/// addition, so rounding cannot accumulate and shift the sweep's end point.
/// The result is a pure function of its arguments: identical inputs always
/// yield the identical ascending-spot sequence. An inverted range (`from >
/// to`, or a NaN bound) yields an empty curve.
///
/// Swept spots must be positive for the prices to be meaningful; the caller
/// owns the range the same way it owns the quote.
pub fn sample_call_curve(input: &PricingInput, range: &SamplingRange) -> Vec<(f64, f64)> {
    let n = range.len();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let spot = range.from + (i as f64) * range.step;
        points.push((spot, input.with_spot(spot).call_price()));
    }
    points
}
