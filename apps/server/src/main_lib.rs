use std::sync::Arc;

use alzoul_core::{FxService, FxServiceTrait, RatesConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub fx_service: Arc<dyn FxServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("ALZ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let rates = RatesConfig::load_or_embedded(config.rates_file.as_deref())?;
    let fx_service = Arc::new(FxService::from_config(rates)?);
    tracing::info!(
        "Rate table loaded with base currency {}",
        fx_service.base_currency().code
    );

    Ok(Arc::new(AppState { fx_service }))
}
