//! Display-string formatting for the UI collaborator.
//!
//! The front-end shows each price as a fixed two-decimal dollar line and
//! blanks both lines whenever an evaluation is suppressed, so a failed parse
//! is observable only as absent output.

use crate::models::bs::PricingResult;

/// `"Call Option Price: $X.XX"`
pub fn format_call_price(price: f64) -> String {
    format!("Call Option Price: ${price:.2}")
}

/// `"Put Option Price: $X.XX"`
pub fn format_put_price(price: f64) -> String {
    format!("Put Option Price: ${price:.2}")
}

/// Both display lines for a priced quote.
pub fn price_lines(result: &PricingResult) -> (String, String) {
    (
        format_call_price(result.call),
        format_put_price(result.put),
    )
}

/// The pair a front-end shows when no result is available.
pub fn cleared() -> (String, String) {
    (String::new(), String::new())
}
