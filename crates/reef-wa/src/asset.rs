//! # QRIS Asset Retrieval
//!
//! Fetches the scannable payment image for the "save to gallery" action.
//! Retrieval failure (network, cross-origin hosting) degrades to handing
//! back the image location for the shell to open directly; it never
//! surfaces an error to the buyer and never blocks confirmation.

use reef_core::{StoreError, StoreResult};
use reqwest::Client;
use tracing::warn;

/// Outcome of a QRIS asset request
#[derive(Debug)]
pub enum QrisAsset {
    /// Image bytes, ready to save locally
    Image {
        bytes: Vec<u8>,
        content_type: String,
    },

    /// Fallback: open the image location directly
    OpenDirectly { url: String },
}

/// Fetcher for the payment-instructions image
pub struct QrisFetcher {
    client: Client,
    url: String,
}

impl QrisFetcher {
    /// Create a fetcher for the given image location
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }

    /// The image location, also used as the fallback target
    pub fn image_url(&self) -> &str {
        &self.url
    }

    async fn try_fetch(&self) -> StoreResult<(Vec<u8>, String)> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StoreError::AssetRetrieval(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::AssetRetrieval(format!("HTTP {}", status)));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::AssetRetrieval(e.to_string()))?;

        Ok((bytes.to_vec(), content_type))
    }

    /// Fetch the image. Never fails: any retrieval error falls back to
    /// `OpenDirectly` with the original location.
    pub async fn fetch(&self) -> QrisAsset {
        match self.try_fetch().await {
            Ok((bytes, content_type)) => QrisAsset::Image {
                bytes,
                content_type,
            },
            Err(err) => {
                warn!("QRIS image fetch failed, falling back to direct open: {}", err);
                QrisAsset::OpenDirectly {
                    url: self.url.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_falls_back_to_direct_open() {
        // Nothing listens on the discard port; the fetch errors fast.
        let fetcher = QrisFetcher::new("http://127.0.0.1:9/qris.png");

        match fetcher.fetch().await {
            QrisAsset::OpenDirectly { url } => {
                assert_eq!(url, "http://127.0.0.1:9/qris.png");
            }
            QrisAsset::Image { .. } => panic!("expected fallback, got image"),
        }
    }
}
