//! Store identity used across rendered pages.

use serde::Deserialize;

/// Store identity and outbound contact endpoints.
///
/// Orders are not processed here; the detail page hands the visitor off
/// to these external messaging endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreProfile {
    /// Display name used in page titles and the site header.
    pub name: String,
    /// WhatsApp number for order links (international digits, no plus).
    pub whatsapp_number: String,
    /// Telegram username for the contact link.
    pub telegram_id: String,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: "فروشگاه ماکان".to_string(),
            whatsapp_number: "989000000000".to_string(),
            telegram_id: "yourid".to_string(),
        }
    }
}
