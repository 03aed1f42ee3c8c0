//! # reef-wa
//!
//! WhatsApp operator handoff for reef-store.
//!
//! This crate provides:
//!
//! 1. **WaNotifier** - implements `reef_core::OrderNotifier`
//!    - Builds `wa.me` deep links with the order summary prefilled
//!    - Fire-and-forget: no delivery receipt exists or is awaited
//!
//! 2. **QrisFetcher** - payment-image retrieval
//!    - Fetches the scannable QRIS image for local saving
//!    - Falls back to "open the URL directly" on any failure
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reef_wa::WaNotifier;
//! use reef_core::{order_summary, OrderNotifier};
//!
//! let notifier = WaNotifier::from_env()?;
//!
//! let summary = order_summary(&order);
//! let link = notifier.message_url(&summary); // hand to the shell to open
//! notifier.send(&summary).await;             // log-side handoff record
//! ```

pub mod asset;
pub mod config;
pub mod notify;

// Re-exports
pub use asset::{QrisAsset, QrisFetcher};
pub use config::WaConfig;
pub use notify::WaNotifier;
