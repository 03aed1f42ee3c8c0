//! # WhatsApp Notifier
//!
//! Builds `wa.me` deep links that open the operator chat with the order
//! summary prefilled. The buyer's device performs the actual send; from
//! this side the handoff is fire-and-forget.

use crate::config::WaConfig;
use async_trait::async_trait;
use reef_core::{OrderNotifier, StoreResult};
use tracing::{debug, info};

/// WhatsApp operator handoff
pub struct WaNotifier {
    config: WaConfig,
}

impl WaNotifier {
    /// Create a new notifier
    pub fn new(config: WaConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env() -> StoreResult<Self> {
        Ok(Self::new(WaConfig::from_env()?))
    }

    pub fn config(&self) -> &WaConfig {
        &self.config
    }

    /// Deep link that opens a WhatsApp chat with the operator, message
    /// prefilled. The summary is percent-encoded whole, newlines included.
    pub fn message_url(&self, summary: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.config.admin_number,
            urlencoding::encode(summary)
        )
    }
}

#[async_trait]
impl OrderNotifier for WaNotifier {
    async fn send(&self, summary: &str) {
        // The link is handed to the shell to open; no delivery receipt
        // exists and none is waited for.
        let url = self.message_url(summary);
        info!(
            channel = self.channel_name(),
            "operator handoff link ready ({} chars)",
            url.len()
        );
        debug!("handoff link: {}", url);
    }

    fn channel_name(&self) -> &'static str {
        "whatsapp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> WaNotifier {
        WaNotifier::new(WaConfig::new(
            "6285198326016",
            "https://example.com/qris.png",
        ))
    }

    #[test]
    fn test_message_url_targets_operator() {
        let url = notifier().message_url("halo");
        assert_eq!(url, "https://wa.me/6285198326016?text=halo");
    }

    #[test]
    fn test_message_url_encodes_summary() {
        let url = notifier().message_url("*Items:*\n- Golden Koi (2x)");

        assert!(url.contains("%0A"), "newlines must be percent-encoded");
        assert!(url.contains("%20"), "spaces must be percent-encoded");
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
    }

    #[tokio::test]
    async fn test_send_is_fire_and_forget() {
        // No result to inspect; the call simply must not panic or block.
        notifier().send("*NOTIFIKASI PESANAN BARU*").await;
    }
}
