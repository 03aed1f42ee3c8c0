//! # reef-core
//!
//! Core types and the cart/checkout state machine for reef-store.
//!
//! This crate provides:
//! - `Product`, `Price`, `Category` and `ProductCatalog` for the catalog
//! - `Cart` and `CartItem` with merge-or-append semantics
//! - `CheckoutSession`, `CheckoutIntent` and `OrderRecord` for the
//!   checkout state machine
//! - `OrderNotifier` trait and `order_summary` for operator handoff
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use reef_core::{Cart, CheckoutSession, order_summary};
//!
//! let mut cart = Cart::new();
//! cart.add(&product, 2);
//!
//! let mut checkout = CheckoutSession::new();
//! checkout.begin_cart(cart.snapshot());
//!
//! let order = checkout.confirm("PlayerOne", Some("081234567890"))?;
//! notifier.send(&order_summary(&order)).await;
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod notify;
pub mod product;

// Re-exports for convenience
pub use cart::{total_price, Cart, CartItem};
pub use checkout::{
    now_wib, CheckoutIntent, CheckoutSession, CheckoutState, OrderRecord, TIMEZONE_LABEL,
};
pub use error::{StoreError, StoreResult};
pub use notify::{order_summary, BoxedNotifier, OrderNotifier, STORE_NAME};
pub use product::{Category, Price, Product, ProductCatalog};
