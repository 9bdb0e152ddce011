//! Display-time currency formatting.
//!
//! The core hands back exact, unrounded decimals; everything here is
//! presentation only. Amounts render with the rupee sign, Indian digit
//! grouping (last three digits, then pairs), and no paise.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole rupees with Indian grouping,
/// e.g. `1234567` → `₹12,34,567`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₹{}", group_indian(&rounded.abs().to_string()))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut pairs = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}
