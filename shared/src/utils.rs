//! # Formatting Utilities
//!
//! Price and rating helpers for dish records.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_price, price_amount};
//!
//! assert_eq!(format_price(249), "₱249");
//! assert_eq!(price_amount("₱249"), Some(249));
//! ```

/// Currency symbol prefixed to every price on the page.
pub const CURRENCY_SYMBOL: char = '₱';

/// Format a whole-peso amount as a display price.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(179), "₱179");
/// assert_eq!(format_price(0), "₱0");
/// ```
pub fn format_price(amount: u32) -> String {
    format!("{}{}", CURRENCY_SYMBOL, amount)
}

/// Parse a display price back into its amount.
///
/// Returns `None` if the currency symbol is missing or the remainder is not a
/// whole number.
pub fn price_amount(price: &str) -> Option<u32> {
    price.strip_prefix(CURRENCY_SYMBOL)?.trim().parse().ok()
}

/// Parse a decimal rating string such as `"4.5"`.
///
/// Negative and non-finite values are rejected.
pub fn rating_value(rating: &str) -> Option<f64> {
    let value: f64 = rating.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
