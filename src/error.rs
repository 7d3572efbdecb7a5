//! Error types for the pricing library.
//!
//! All fallible operations return `Result<T, PriceError>` rather than panicking,
//! so a front-end can distinguish "the field did not parse" (withhold output)
//! from "the value is numerically meaningless" (report a validation failure).

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PriceError>;

/// Errors that can occur while turning raw quote fields into priced output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PriceError {
    /// A raw input field is empty or not a number.
    #[error("field `{field}` is not a number: {value:?}")]
    Parse {
        /// Identifier of the offending input field (e.g., "stock-price").
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A numeric input is NaN or infinite.
    #[error("parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// A parameter violates its domain (e.g., zero volatility, negative spot).
    #[error("parameter {name} must be > 0, got {value}")]
    Domain { name: &'static str, value: f64 },
}
