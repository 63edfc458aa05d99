/// Code of the currency every rate in the table is expressed against.
pub const BASE_CURRENCY_CODE: &str = "SDG";

/// Decimal places used when presenting a converted amount.
pub const DISPLAY_AMOUNT_DECIMALS: u32 = 2;

/// Decimal places used when presenting an exchange rate.
pub const DISPLAY_RATE_DECIMALS: u32 = 6;

/// Default deep-link host for outgoing chat messages.
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";

/// Rate configuration shipped with the binary.
pub const DEFAULT_RATES_JSON: &str = include_str!("../config/rates.json");

/// Significant digits kept when a rate is too small for the fixed decimals.
pub const DISPLAY_RATE_SIGNIFICANT_DIGITS: u32 = 4;
