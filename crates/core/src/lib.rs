//! Al-Zoul Core - rate table, currency conversion and share links.
//!
//! This crate contains the calculator logic behind the Al-Zoul transfers
//! website. It is free of I/O apart from reading the rate file once, and
//! exposes two pure operations to the host UI: converting an amount and
//! composing the chat message that shares the result.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod i18n;
pub mod share;
pub mod utils;

pub use config::RatesConfig;
pub use fx::{ConversionRequest, ConversionResult, FxError, FxService, FxServiceTrait};
pub use i18n::Language;
pub use share::ShareMessage;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
