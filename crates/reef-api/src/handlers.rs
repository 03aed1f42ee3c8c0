//! # Request Handlers
//!
//! Axum request handlers for the storefront API. Everything mutates
//! through the buyer's session; the catalog is read-only.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use reef_core::{
    order_summary, Cart, CartItem, Category, CheckoutIntent, OrderNotifier, OrderRecord, Price,
    StoreError,
};
use reef_wa::QrisAsset;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

/// Payment method label shown with the checkout instructions
const PAYMENT_METHOD: &str = "QRIS (Gopay, Dana, OVO, Bank)";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Add an item to the cart
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    /// Product ID
    pub product_id: String,
    /// Quantity
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Begin a checkout. With `product_id` this is a direct "buy now" that
/// never touches the cart; without it the current cart is snapshotted.
#[derive(Debug, Deserialize)]
pub struct BeginCheckoutRequest {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Confirm the in-progress checkout
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    /// Buyer's game id / nickname (required, non-blank)
    pub buyer_id: String,
    /// Buyer's WhatsApp number (optional)
    #[serde(default)]
    pub whatsapp: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Cart contents as rendered to the shell
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub item_count: u32,
    pub total: Price,
    pub total_display: String,
}

impl CartView {
    fn of(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            item_count: cart.item_count(),
            total: cart.total(),
            total_display: cart.total().display(),
        }
    }
}

/// Add-to-cart response; `reveal_cart` signals the shell to open the
/// cart panel after the mutation
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub reveal_cart: bool,
    pub cart: CartView,
}

/// Checkout instructions returned when an intent is captured
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    #[serde(flatten)]
    pub intent: CheckoutIntent,
    pub item_count: u32,
    pub total: Price,
    pub total_display: String,
    pub payment_method: &'static str,
    pub qris_image_url: String,
}

/// Confirmation receipt plus the operator handoff link
#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub order: OrderRecord,
    pub total_display: String,
    pub summary: String,
    pub notify_url: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn store_error_to_response(err: StoreError) -> HandlerError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn bad_request(message: impl Into<String>) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(message, 400)),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "reef-store",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List the full catalog
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "products": state.catalog.products,
        "count": state.catalog.len()
    }))
}

/// Get a single product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let product = state
        .catalog
        .get(&product_id)
        .ok_or_else(|| {
            store_error_to_response(StoreError::ProductNotFound {
                product_id: product_id.clone(),
            })
        })?;

    Ok(Json(product.clone()))
}

/// Catalog grouped by storefront section, in display order
pub async fn catalog_sections(State(state): State<AppState>) -> impl IntoResponse {
    let sections: Vec<_> = Category::ALL
        .iter()
        .map(|category| {
            serde_json::json!({
                "slug": category.slug(),
                "label": category.display_name(),
                "products": state.catalog.by_category(*category).collect::<Vec<_>>(),
            })
        })
        .collect();

    Json(serde_json::json!({ "sections": sections }))
}

/// Open a fresh buyer session
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = state.sessions.create().await;
    info!("Opened buyer session {}", session_id);
    Json(serde_json::json!({ "session_id": session_id }))
}

/// Current cart contents
pub async fn get_cart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CartView>, HandlerError> {
    let view = state
        .sessions
        .with_session(session_id, |s| CartView::of(&s.cart))
        .await
        .map_err(store_error_to_response)?;

    Ok(Json(view))
}

/// Add a product to the cart (merge-or-append)
#[instrument(skip(state, request), fields(session_id = %session_id, product_id = %request.product_id))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>, HandlerError> {
    if request.quantity == 0 {
        return Err(bad_request("Quantity must be at least 1"));
    }

    let product = state
        .catalog
        .get(&request.product_id)
        .cloned()
        .ok_or_else(|| {
            store_error_to_response(StoreError::ProductNotFound {
                product_id: request.product_id.clone(),
            })
        })?;

    let view = state
        .sessions
        .with_session(session_id, |s| {
            s.cart.add(&product, request.quantity);
            CartView::of(&s.cart)
        })
        .await
        .map_err(store_error_to_response)?;

    info!(
        "Cart now holds {} items, total {}",
        view.item_count, view.total_display
    );

    Ok(Json(AddToCartResponse {
        reveal_cart: true,
        cart: view,
    }))
}

/// Remove a line item by product id. No-op when absent.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path((session_id, product_id)): Path<(Uuid, String)>,
) -> Result<Json<CartView>, HandlerError> {
    let view = state
        .sessions
        .with_session(session_id, |s| {
            s.cart.remove(&product_id);
            CartView::of(&s.cart)
        })
        .await
        .map_err(store_error_to_response)?;

    Ok(Json(view))
}

/// Begin a checkout: direct "buy now" when `product_id` is supplied,
/// otherwise a snapshot of the current cart
#[instrument(skip(state, request), fields(session_id = %session_id))]
pub async fn begin_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<BeginCheckoutRequest>,
) -> Result<Json<CheckoutView>, HandlerError> {
    let intent = if let Some(product_id) = &request.product_id {
        if request.quantity == 0 {
            return Err(bad_request("Quantity must be at least 1"));
        }

        let product = state.catalog.get(product_id).cloned().ok_or_else(|| {
            store_error_to_response(StoreError::ProductNotFound {
                product_id: product_id.clone(),
            })
        })?;

        // Direct path: the cart is never read or written here
        state
            .sessions
            .with_session(session_id, |s| {
                s.checkout.begin_direct(&product, request.quantity);
                s.checkout.intent().cloned()
            })
            .await
            .map_err(store_error_to_response)?
    } else {
        state
            .sessions
            .with_session(session_id, |s| {
                let snapshot = s.cart.snapshot();
                if s.checkout.begin_cart(snapshot) {
                    s.checkout.intent().cloned()
                } else {
                    None
                }
            })
            .await
            .map_err(store_error_to_response)?
    };

    let intent = intent.ok_or_else(|| bad_request("Nothing to check out: cart is empty"))?;

    let total = intent.total();
    info!(
        "Checkout started: {} items, total {}",
        intent.item_count(),
        total.display()
    );

    Ok(Json(CheckoutView {
        item_count: intent.item_count(),
        total,
        total_display: total.display(),
        payment_method: PAYMENT_METHOD,
        qris_image_url: state.qris.image_url().to_string(),
        intent,
    }))
}

/// Confirm the checkout: validates the buyer id, builds the OrderRecord,
/// and fires the operator notification without waiting on it
#[instrument(skip(state, request), fields(session_id = %session_id))]
pub async fn confirm_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>, HandlerError> {
    let order = state
        .sessions
        .with_session(session_id, |s| {
            s.checkout.confirm(&request.buyer_id, request.whatsapp.as_deref())
        })
        .await
        .and_then(|r| r)
        .map_err(store_error_to_response)?;

    let summary = order_summary(&order);
    let notify_url = state.notifier.message_url(&summary);

    // Fire-and-forget handoff; confirmation never waits on the channel
    let notifier = state.notifier.clone();
    let outbound = summary.clone();
    tokio::spawn(async move {
        notifier.send(&outbound).await;
    });

    info!(
        "Order {} confirmed: {} items, total {}",
        order.reference,
        order.intent.item_count(),
        order.total.display()
    );

    Ok(Json(ConfirmResponse {
        total_display: order.total.display(),
        summary,
        notify_url,
        order,
    }))
}

/// Dismiss the checkout. The cart is independent state and survives.
pub async fn dismiss_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    state
        .sessions
        .with_session(session_id, |s| s.checkout.dismiss())
        .await
        .map_err(store_error_to_response)?;

    Ok(Json(serde_json::json!({ "status": "dismissed" })))
}

/// Serve the QRIS payment image for local saving. On retrieval failure
/// the buyer is redirected to the image location instead of seeing an
/// error.
pub async fn qris_image(State(state): State<AppState>) -> Response {
    match state.qris.fetch().await {
        QrisAsset::Image {
            bytes,
            content_type,
        } => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        QrisAsset::OpenDirectly { url } => Redirect::temporary(&url).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
    }

    #[test]
    fn test_store_error_conversion() {
        let err = StoreError::Validation("buyer id must not be blank".to_string());
        let (status, _json) = store_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let err = StoreError::SessionNotFound {
            session_id: "x".to_string(),
        };
        let (status, _json) = store_error_to_response(err);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
