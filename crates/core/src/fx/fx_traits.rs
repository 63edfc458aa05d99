use super::fx_model::{ConversionRequest, ConversionResult, Corridor, Currency};
use crate::errors::Result;
use crate::i18n::Language;
use crate::share::ShareMessage;

/// Trait defining the contract for FX service operations.
pub trait FxServiceTrait: Send + Sync {
    fn base_currency(&self) -> &Currency;
    /// Every currency, base first, in configuration order.
    fn list_currencies(&self) -> Vec<Currency>;
    fn list_corridors(&self) -> Vec<Corridor>;
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult>;
    fn compose_share_message(
        &self,
        request: &ConversionRequest,
        result: &ConversionResult,
        language: Language,
    ) -> Result<ShareMessage>;
}
