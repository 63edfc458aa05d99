use std::path::Path;

use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RATES_JSON;
use crate::errors::{Error, Result};
use crate::fx::{normalize_currency_code, Corridor, Currency, RateTable};
use crate::i18n::LocalizedNames;
use crate::share::MessagingConfig;

/// The base currency entry of the rate file. Its rate is implicitly one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BaseCurrencyConfig {
    pub code: String,
    pub names: LocalizedNames,
}

/// Human-edited rate file, loaded once at start-up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatesConfig {
    pub base_currency: BaseCurrencyConfig,
    pub currencies: Vec<Currency>,
    pub messaging: MessagingConfig,
    #[serde(default)]
    pub corridors: Vec<Corridor>,
}

impl RatesConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RatesConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(DEFAULT_RATES_JSON)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&contents).map_err(|e| match e {
            Error::InvalidConfigValue(msg) => {
                Error::InvalidConfigValue(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        info!(
            "Loaded {} currencies from {}",
            config.currencies.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to the embedded file.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("No rate file configured, using embedded rates");
                Self::embedded()
            }
        }
    }

    pub fn build_rate_table(&self) -> Result<RateTable> {
        RateTable::new(
            &self.base_currency.code,
            self.base_currency.names.clone(),
            self.currencies.clone(),
        )
    }

    /// Corridors with normalized codes. Every corridor must name a currency
    /// present in `table` and carry a non-negative fee.
    pub fn validated_corridors(&self, table: &RateTable) -> Result<Vec<Corridor>> {
        self.corridors
            .iter()
            .map(|corridor| {
                let code = normalize_currency_code(&corridor.currency)
                    .filter(|code| table.resolve(code).is_some())
                    .ok_or_else(|| {
                        Error::InvalidConfigValue(format!(
                            "corridor {} uses unknown currency '{}'",
                            corridor.country.en, corridor.currency
                        ))
                    })?;
                if corridor.fee_percent < Decimal::ZERO {
                    return Err(Error::InvalidConfigValue(format!(
                        "corridor {} has negative fee {}",
                        corridor.country.en, corridor.fee_percent
                    )));
                }
                if code == table.base().code {
                    warn!(
                        "Corridor {} is quoted in the base currency",
                        corridor.country.en
                    );
                }
                Ok(Corridor {
                    currency: code,
                    ..corridor.clone()
                })
            })
            .collect()
    }
}
