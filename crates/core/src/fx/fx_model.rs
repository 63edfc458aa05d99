use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::{format_amount, format_rate, parse_amount};
use super::fx_errors::FxError;
use crate::i18n::{Language, LocalizedNames};

/// A currency offered by the calculator.
///
/// `rate` is the number of base-currency units (SDG) for one unit of this
/// currency. The base currency itself carries a rate of exactly one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub names: LocalizedNames,
    #[serde(with = "crate::utils::decimal_serde")]
    pub rate: Decimal,
}

impl Currency {
    pub fn new(code: impl Into<String>, names: LocalizedNames, rate: Decimal) -> Self {
        Self {
            code: code.into(),
            names,
            rate,
        }
    }

    /// Display name in the requested language.
    pub fn label(&self, language: Language) -> &str {
        self.names.get(language)
    }
}

/// One "calculate" action: convert `amount` of `source` into `target`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    #[serde(with = "crate::utils::decimal_serde")]
    pub amount: Decimal,
    pub source: String,
    pub target: String,
}

impl ConversionRequest {
    pub fn new(amount: Decimal, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            amount,
            source: source.into(),
            target: target.into(),
        }
    }

    /// Builds a request from raw form input, validating the amount text.
    pub fn parse(
        amount: &str,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self, FxError> {
        Ok(Self::new(parse_amount(amount)?, source, target))
    }
}

/// Outcome of a conversion, kept at full precision.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[serde(with = "crate::utils::decimal_serde")]
    pub converted_amount: Decimal,
    /// "1 source = effective_rate target".
    #[serde(with = "crate::utils::decimal_serde")]
    pub effective_rate: Decimal,
}

impl ConversionResult {
    /// Converted amount rounded to two decimals for presentation.
    pub fn display_amount(&self) -> String {
        format_amount(self.converted_amount)
    }

    pub fn display_rate(&self) -> String {
        format_rate(self.effective_rate)
    }
}

/// A destination country served by the business, shown on the Arab transfers page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Corridor {
    pub country: LocalizedNames,
    pub currency: String,
    pub delivery_time: LocalizedNames,
    #[serde(with = "crate::utils::decimal_serde")]
    pub fee_percent: Decimal,
}
