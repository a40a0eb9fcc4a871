//! WhatsApp contact configuration and chat deep-link building.

use gasexpress_core::config::StorefrontConfig;
use gasexpress_core::{GasExpressError, GasExpressResult};
use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

/// Validated WhatsApp contact point for the storefront. The number is
/// stored digits-only in international format, as `wa.me` expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsappContact {
    number: String,
    default_message: String,
}

impl WhatsappContact {
    /// Normalize and validate a display-formatted number. Separators and
    /// a leading `+` are stripped; anything outside 8-15 digits is not a
    /// dialable international number.
    pub fn new(number: &str, default_message: &str) -> GasExpressResult<Self> {
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < 8 || digits.len() > 15 {
            return Err(GasExpressError::Contact(format!(
                "invalid WhatsApp number: {number}"
            )));
        }
        Ok(Self {
            number: digits,
            default_message: default_message.to_string(),
        })
    }

    pub fn from_config(config: &StorefrontConfig) -> GasExpressResult<Self> {
        Self::new(&config.whatsapp_number, &config.whatsapp_greeting)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// `wa.me` deep link with a prefilled message. Falls back to the
    /// configured greeting when no message is given.
    pub fn chat_link(&self, message: Option<&str>) -> String {
        let text = message.unwrap_or(&self.default_message);
        let encoded: String = byte_serialize(text.as_bytes()).collect();
        format!("https://wa.me/{}?text={}", self.number, encoded)
    }
}
