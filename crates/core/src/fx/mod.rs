//! FX (Foreign Exchange) module - rate table, conversion and presentation helpers.

mod amount;
pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;
mod rate_table;

pub use amount::{format_amount, format_rate, parse_amount};
pub use currency_converter::{convert, CurrencyConverter};
pub use fx_errors::FxError;
pub use fx_model::{ConversionRequest, ConversionResult, Corridor, Currency};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
pub use rate_table::{normalize_currency_code, RateTable};
