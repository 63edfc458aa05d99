use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MESSAGING_BASE_URL;
use crate::errors::{Error, Result};

fn default_base_url() -> String {
    DEFAULT_MESSAGING_BASE_URL.to_string()
}

/// Where shared conversion summaries are sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessagingConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Business contact number, in any human format ("+966 57 803 0378").
    pub recipient: String,
}

impl MessagingConfig {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            recipient: recipient.into(),
        }
    }

    /// Recipient reduced to its digits, the form wa.me links accept.
    pub fn recipient_digits(&self) -> String {
        self.recipient.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.recipient.trim().is_empty() {
            return Err(Error::MissingConfigKey("messaging.recipient".to_string()));
        }
        if self.recipient_digits().is_empty() {
            return Err(Error::InvalidConfigValue(format!(
                "messaging recipient '{}' has no digits",
                self.recipient
            )));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(Error::InvalidConfigValue(format!(
                "messaging base url '{}' must be http(s)",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// A ready-to-send summary and the link that opens it in the chat app.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShareMessage {
    pub text: String,
    pub uri: String,
}
