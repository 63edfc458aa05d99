//! Rate configuration - the static rate file and its validation.

mod rates_config;

pub use rates_config::{BaseCurrencyConfig, RatesConfig};
