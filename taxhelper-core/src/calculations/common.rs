//! Shared helpers for tax calculations.

use rust_decimal::Decimal;

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxhelper_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-50.00), dec!(0.00)), dec!(0.00));
/// ```
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}
