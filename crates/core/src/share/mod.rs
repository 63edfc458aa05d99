//! Share module - turns a conversion into a localized chat message and deep link.

mod share_model;
mod share_service;
mod templates;

pub use share_model::{MessagingConfig, ShareMessage};
pub use share_service::{build_share_uri, compose_share_message};
