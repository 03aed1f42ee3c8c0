//! # Routes
//!
//! Axum router configuration for the storefront API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Catalog (read-only):
///   - GET  /api/v1/products - List all products
///   - GET  /api/v1/products/{id} - Get product by ID
///   - GET  /api/v1/catalog - Catalog grouped by section
///
/// - Buyer sessions (one cart + one checkout each):
///   - POST   /api/v1/sessions - Open a session
///   - GET    /api/v1/sessions/{sid}/cart - Cart contents
///   - POST   /api/v1/sessions/{sid}/cart/items - Add to cart
///   - DELETE /api/v1/sessions/{sid}/cart/items/{pid} - Remove line item
///   - POST   /api/v1/sessions/{sid}/checkout - Begin checkout
///   - POST   /api/v1/sessions/{sid}/confirm - Confirm order
///   - POST   /api/v1/sessions/{sid}/dismiss - Dismiss checkout
///
/// - Payment instructions:
///   - GET /api/v1/payment/qris - QRIS image (redirects on fetch failure)
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the storefront shell is served from a separate
    // origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Catalog
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", get(handlers::get_product))
        .route("/catalog", get(handlers::catalog_sections))
        // Payment instructions
        .route("/payment/qris", get(handlers::qris_image))
        // Buyer sessions
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{session_id}/cart", get(handlers::get_cart))
        .route(
            "/sessions/{session_id}/cart/items",
            post(handlers::add_to_cart),
        )
        .route(
            "/sessions/{session_id}/cart/items/{product_id}",
            delete(handlers::remove_from_cart),
        )
        .route(
            "/sessions/{session_id}/checkout",
            post(handlers::begin_checkout),
        )
        .route(
            "/sessions/{session_id}/confirm",
            post(handlers::confirm_checkout),
        )
        .route(
            "/sessions/{session_id}/dismiss",
            post(handlers::dismiss_checkout),
        );

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
