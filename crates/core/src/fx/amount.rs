use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::fx_errors::FxError;
use crate::constants::{
    DISPLAY_AMOUNT_DECIMALS, DISPLAY_RATE_DECIMALS, DISPLAY_RATE_SIGNIFICANT_DIGITS,
};

const MAX_RATE_DECIMALS: u32 = 20;

/// Parses the amount typed by the user.
///
/// Accepts plain decimals ("100", "250.50") and scientific notation ("1e3").
/// The input scale is kept, so `"100.50"` displays as `100.50` again.
pub fn parse_amount(input: &str) -> Result<Decimal, FxError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FxError::InvalidAmount("amount is required".to_string()));
    }
    if trimmed.contains('_') {
        return Err(FxError::InvalidAmount(format!("'{}' is not a number", trimmed)));
    }

    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| FxError::InvalidAmount(format!("'{}' is not a number", trimmed)))?;

    if amount <= Decimal::ZERO {
        return Err(FxError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Formats an amount with exactly two decimals, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(
        DISPLAY_AMOUNT_DECIMALS,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(DISPLAY_AMOUNT_DECIMALS);
    rounded.to_string()
}

/// Formats a rate with at least six decimals, extended so that small cross
/// rates keep `DISPLAY_RATE_SIGNIFICANT_DIGITS` significant digits. Trailing
/// zeros are trimmed.
pub fn format_rate(rate: Decimal) -> String {
    let mut leading_zeros = 0u32;
    let mut scaled = rate.abs();
    while !scaled.is_zero() && scaled < dec!(0.1) && leading_zeros < MAX_RATE_DECIMALS {
        scaled *= Decimal::TEN;
        leading_zeros += 1;
    }
    let decimals = (leading_zeros + DISPLAY_RATE_SIGNIFICANT_DIGITS)
        .clamp(DISPLAY_RATE_DECIMALS, MAX_RATE_DECIMALS);

    rate.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}
