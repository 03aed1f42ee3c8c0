//! # reef-api
//!
//! HTTP API layer for reef-store.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the catalog, cart and checkout
//! - Buyer-session registry (one cart + one checkout per buyer)
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/products` | List products |
//! | GET | `/api/v1/products/:id` | Get product |
//! | GET | `/api/v1/catalog` | Catalog grouped by section |
//! | POST | `/api/v1/sessions` | Open a buyer session |
//! | GET | `/api/v1/sessions/:sid/cart` | Cart contents |
//! | POST | `/api/v1/sessions/:sid/cart/items` | Add to cart |
//! | DELETE | `/api/v1/sessions/:sid/cart/items/:pid` | Remove line item |
//! | POST | `/api/v1/sessions/:sid/checkout` | Begin checkout |
//! | POST | `/api/v1/sessions/:sid/confirm` | Confirm order |
//! | POST | `/api/v1/sessions/:sid/dismiss` | Dismiss checkout |
//! | GET | `/api/v1/payment/qris` | QRIS payment image |

pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::create_router;
pub use session::{BuyerSession, SessionStore};
pub use state::{AppConfig, AppState};
