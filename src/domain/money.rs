//! Helpers for two-decimal money amounts.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for every stored amount.
pub const MONEY_SCALE: u32 = 2;

/// Largest amount accepted from a form: one billion.
pub const MAX_MONEY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Round `value` half-up to two decimal places.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with exactly two decimal places, e.g. `10.00`.
pub fn format_money(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}

/// Parse a stored amount. Accepts any decimal literal; callers round as needed.
pub fn parse_money(value: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(value.trim())
}

/// Returns `true` when `value` is a non-negative number with at most two
/// significant decimal places (`12`, `12.5` and `12.50` all qualify).
pub fn is_valid_money(value: &str) -> bool {
    match parse_money(value) {
        Ok(amount) => !amount.is_sign_negative() && amount.normalize().scale() <= MONEY_SCALE,
        Err(_) => false,
    }
}

/// Returns `true` when `value` parses to an amount no larger than [`MAX_MONEY`].
pub fn is_within_money_range(value: &str) -> bool {
    parse_money(value).is_ok_and(|amount| amount <= MAX_MONEY)
}
