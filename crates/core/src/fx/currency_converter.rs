use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::{ConversionRequest, ConversionResult};
use super::rate_table::RateTable;

/// Converts `amount` of `source` into `target`, pivoting through the base currency.
///
/// `converted = amount * rate(source) / rate(target)` and the effective rate
/// is `rate(source) / rate(target)`. Nothing is rounded here.
pub fn convert(
    amount: Decimal,
    source: &str,
    target: &str,
    rate_table: &RateTable,
) -> Result<ConversionResult, FxError> {
    if amount <= Decimal::ZERO {
        return Err(FxError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            amount
        )));
    }

    let from = rate_table
        .resolve(source)
        .ok_or_else(|| FxError::UnknownCurrency(source.trim().to_string()))?;
    let to = rate_table
        .resolve(target)
        .ok_or_else(|| FxError::UnknownCurrency(target.trim().to_string()))?;

    if from.code == to.code {
        return Err(FxError::InvalidRequest(format!(
            "source and target currency are both {}",
            from.code
        )));
    }

    let from_rate = rate_table.rate_of(&from.code)?;
    let to_rate = rate_table.rate_of(&to.code)?;

    let too_large = || FxError::InvalidAmount(format!("amount {} is too large", amount));
    let base_amount = amount.checked_mul(from_rate).ok_or_else(too_large)?;
    let converted_amount = base_amount.checked_div(to_rate).ok_or_else(too_large)?;
    let effective_rate = from_rate
        .checked_div(to_rate)
        .ok_or_else(|| FxError::UnknownCurrency(to.code.clone()))?;

    debug!(
        "Converted {} {} -> {} {} (rate {}, {} {} at base)",
        amount,
        from.code,
        converted_amount,
        to.code,
        effective_rate,
        base_amount,
        rate_table.base().code
    );

    Ok(ConversionResult {
        converted_amount,
        effective_rate,
    })
}

/// Shared, read-only converter over a loaded rate table.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rate_table: Arc<RateTable>,
}

impl CurrencyConverter {
    pub fn new(rate_table: Arc<RateTable>) -> Self {
        Self { rate_table }
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    pub fn convert_amount(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult, FxError> {
        convert(amount, from_currency, to_currency, &self.rate_table)
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> Result<ConversionResult, FxError> {
        self.convert_amount(request.amount, &request.source, &request.target)
    }

    /// Helper for single unit conversion.
    pub fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal, FxError> {
        self.convert_amount(Decimal::ONE, from_currency, to_currency)
            .map(|result| result.effective_rate)
    }
}
