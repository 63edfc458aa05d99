use std::sync::Arc;

use log::info;

use super::currency_converter::CurrencyConverter;
use super::fx_model::{ConversionRequest, ConversionResult, Corridor, Currency};
use super::fx_traits::FxServiceTrait;
use super::rate_table::RateTable;
use crate::config::RatesConfig;
use crate::errors::Result;
use crate::i18n::Language;
use crate::share::{compose_share_message, MessagingConfig, ShareMessage};

/// Read-only FX service over the rate file loaded at start-up.
pub struct FxService {
    converter: CurrencyConverter,
    messaging: MessagingConfig,
    corridors: Vec<Corridor>,
}

impl FxService {
    pub fn new(
        rate_table: Arc<RateTable>,
        messaging: MessagingConfig,
        corridors: Vec<Corridor>,
    ) -> Result<Self> {
        messaging.validate()?;
        Ok(Self {
            converter: CurrencyConverter::new(rate_table),
            messaging,
            corridors,
        })
    }

    /// Validates `config` and builds the service from it.
    pub fn from_config(config: RatesConfig) -> Result<Self> {
        let table = config.build_rate_table()?;
        let corridors = config.validated_corridors(&table)?;
        info!(
            "FX service ready: base {}, {} quoted currencies, {} corridors",
            table.base().code,
            table.currencies().len() - 1,
            corridors.len()
        );
        Self::new(Arc::new(table), config.messaging, corridors)
    }

    pub fn rate_table(&self) -> &RateTable {
        self.converter.rate_table()
    }
}

impl FxServiceTrait for FxService {
    fn base_currency(&self) -> &Currency {
        self.rate_table().base()
    }

    fn list_currencies(&self) -> Vec<Currency> {
        self.rate_table().currencies().to_vec()
    }

    fn list_corridors(&self) -> Vec<Corridor> {
        self.corridors.clone()
    }

    fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        Ok(self.converter.convert_request(request)?)
    }

    fn compose_share_message(
        &self,
        request: &ConversionRequest,
        result: &ConversionResult,
        language: Language,
    ) -> Result<ShareMessage> {
        Ok(compose_share_message(
            request,
            result,
            language,
            self.rate_table(),
            &self.messaging,
        )?)
    }
}
