use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::Currency;
use crate::errors::{Error, Result};
use crate::i18n::LocalizedNames;

/// Normalizes a currency code to upper case, rejecting anything that is not
/// a non-empty run of ASCII letters.
pub fn normalize_currency_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Immutable table of rates, each expressed as base units per one unit of
/// the currency. The base currency is always the first entry with rate one.
#[derive(Debug, Clone)]
pub struct RateTable {
    currencies: Vec<Currency>,
    index: HashMap<String, usize>,
}

impl RateTable {
    /// Builds a table from a base currency and its quoted currencies.
    ///
    /// Codes are normalized to upper case. Duplicate codes and non-positive
    /// rates are rejected. A repeated base entry is tolerated only with a
    /// rate of exactly one and is then dropped.
    pub fn new(
        base_code: &str,
        base_names: LocalizedNames,
        currencies: Vec<Currency>,
    ) -> Result<Self> {
        let base_code = normalize_currency_code(base_code).ok_or_else(|| {
            Error::InvalidConfigValue(format!("invalid base currency code '{}'", base_code))
        })?;

        let mut table = RateTable {
            currencies: Vec::with_capacity(currencies.len() + 1),
            index: HashMap::new(),
        };
        table.push(Currency::new(base_code.clone(), base_names, Decimal::ONE));

        for currency in currencies {
            let code = normalize_currency_code(&currency.code).ok_or_else(|| {
                Error::InvalidConfigValue(format!("invalid currency code '{}'", currency.code))
            })?;

            if code == base_code {
                if currency.rate != Decimal::ONE {
                    return Err(Error::InvalidConfigValue(format!(
                        "base currency {} must have rate 1, got {}",
                        code, currency.rate
                    )));
                }
                warn!("Ignoring redundant rate entry for base currency {}", code);
                continue;
            }
            if table.index.contains_key(&code) {
                return Err(Error::InvalidConfigValue(format!(
                    "duplicate currency code {}",
                    code
                )));
            }
            if currency.rate <= Decimal::ZERO {
                return Err(Error::InvalidConfigValue(format!(
                    "rate for {} must be positive, got {}",
                    code, currency.rate
                )));
            }

            table.push(Currency { code, ..currency });
        }

        Ok(table)
    }

    /// Convenience constructor from `(code, rate)` pairs, using the code as
    /// the display name in both languages.
    pub fn from_rates<'a>(
        base_code: &str,
        rates: impl IntoIterator<Item = (&'a str, Decimal)>,
    ) -> Result<Self> {
        let currencies = rates
            .into_iter()
            .map(|(code, rate)| Currency::new(code, LocalizedNames::new(code, code), rate))
            .collect();
        RateTable::new(base_code, LocalizedNames::new(base_code, base_code), currencies)
    }

    fn push(&mut self, currency: Currency) {
        self.index.insert(currency.code.clone(), self.currencies.len());
        self.currencies.push(currency);
    }

    pub fn base(&self) -> &Currency {
        &self.currencies[0]
    }

    /// Every currency, base first, in configuration order.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Looks a currency up by code (any case) or by either localized name.
    pub fn resolve(&self, key: &str) -> Option<&Currency> {
        if let Some(code) = normalize_currency_code(key) {
            if let Some(&idx) = self.index.get(&code) {
                return Some(&self.currencies[idx]);
            }
        }
        self.currencies.iter().find(|c| c.names.matches(key))
    }

    /// Base units per one unit of `key`. Never returns zero.
    pub fn rate_of(&self, key: &str) -> std::result::Result<Decimal, FxError> {
        match self.resolve(key) {
            Some(currency) if !currency.rate.is_zero() => Ok(currency.rate),
            _ => Err(FxError::UnknownCurrency(key.trim().to_string())),
        }
    }
}
