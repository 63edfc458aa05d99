use log::debug;

use super::share_model::{MessagingConfig, ShareMessage};
use super::templates::{render, MessageFields};
use crate::fx::{ConversionRequest, ConversionResult, FxError, RateTable};
use crate::i18n::Language;

/// Builds `<base_url>/<recipient-digits>?text=<percent-encoded text>`.
pub fn build_share_uri(messaging: &MessagingConfig, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        messaging.base_url.trim_end_matches('/'),
        messaging.recipient_digits(),
        urlencoding::encode(text)
    )
}

/// Renders a conversion into a localized summary and its chat deep link.
///
/// Currency labels are the localized names from `rate_table`; the amount is
/// shown exactly as requested, the total with two decimals.
pub fn compose_share_message(
    request: &ConversionRequest,
    result: &ConversionResult,
    language: Language,
    rate_table: &RateTable,
    messaging: &MessagingConfig,
) -> Result<ShareMessage, FxError> {
    let source = rate_table
        .resolve(&request.source)
        .ok_or_else(|| FxError::UnknownCurrency(request.source.trim().to_string()))?;
    let target = rate_table
        .resolve(&request.target)
        .ok_or_else(|| FxError::UnknownCurrency(request.target.trim().to_string()))?;

    let amount = request.amount.to_string();
    let rate = result.display_rate();
    let total = result.display_amount();
    let text = render(
        language,
        &MessageFields {
            amount: &amount,
            source_label: source.label(language),
            target_label: target.label(language),
            rate: &rate,
            total: &total,
        },
    );
    let uri = build_share_uri(messaging, &text);
    debug!(
        "Composed {} share message for {} {} -> {}",
        language, amount, source.code, target.code
    );

    Ok(ShareMessage { text, uri })
}
