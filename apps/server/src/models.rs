use std::str::FromStr;

use alzoul_core::fx::Corridor;
use alzoul_core::{ConversionRequest, ConversionResult, Language};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Amount as sent by the form: the raw input text or a JSON number.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(serde_json::Number),
}

impl AmountInput {
    pub fn as_text(&self) -> String {
        match self {
            AmountInput::Text(text) => text.clone(),
            AmountInput::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConvertBody {
    pub amount: AmountInput,
    pub from: String,
    pub to: String,
}

impl ConvertBody {
    pub fn to_request(&self) -> Result<ConversionRequest, ApiError> {
        to_request(&self.amount, &self.from, &self.to)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShareBody {
    pub amount: AmountInput,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl ShareBody {
    pub fn to_request(&self) -> Result<ConversionRequest, ApiError> {
        to_request(&self.amount, &self.from, &self.to)
    }

    pub fn language(&self) -> Result<Language, ApiError> {
        parse_language(self.language.as_deref())
    }
}

/// Absent means the default language; anything but `ar`/`en` is rejected.
fn parse_language(tag: Option<&str>) -> Result<Language, ApiError> {
    match tag {
        None => Ok(Language::default()),
        Some(tag) => Language::from_str(tag).map_err(ApiError::from),
    }
}

fn to_request(amount: &AmountInput, from: &str, to: &str) -> Result<ConversionRequest, ApiError> {
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "both 'from' and 'to' currencies are required".to_string(),
        ));
    }
    ConversionRequest::parse(&amount.as_text(), from.trim(), to.trim())
        .map_err(ApiError::from)
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub amount: String,
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub result: ConversionResult,
    pub display_amount: String,
    pub display_rate: String,
}

impl ConvertResponse {
    pub fn new(request: &ConversionRequest, result: ConversionResult) -> Self {
        Self {
            amount: request.amount.to_string(),
            from: request.source.clone(),
            to: request.target.clone(),
            display_amount: result.display_amount(),
            display_rate: result.display_rate(),
            result,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

impl LanguageQuery {
    pub fn language(&self) -> Result<Language, ApiError> {
        parse_language(self.lang.as_deref())
    }
}

/// A corridor rendered in one language.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CorridorView {
    pub country: String,
    pub currency: String,
    pub delivery_time: String,
    pub fee_percent: String,
}

impl CorridorView {
    pub fn localized(corridor: &Corridor, language: Language) -> Self {
        Self {
            country: corridor.country.get(language).to_string(),
            currency: corridor.currency.clone(),
            delivery_time: corridor.delivery_time.get(language).to_string(),
            fee_percent: corridor.fee_percent.to_string(),
        }
    }
}
