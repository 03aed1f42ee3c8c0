//! # Reef Store
//!
//! Storefront API for in-game goods with manual QRIS checkout and
//! WhatsApp operator handoff.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export ADMIN_WA_NUMBER=6285198326016
//! export QRIS_IMAGE_URL=https://assets.example.com/qris.png
//!
//! # Run the server
//! reef-store
//! ```

use reef_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.catalog.len());
    info!("Operator channel: whatsapp");

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🐠 Reef Store starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("🛒 Catalog: GET http://{}/api/v1/catalog", addr);
        info!("💳 Checkout: POST http://{}/api/v1/sessions/:sid/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🐠 Reef Store 🐠
  ━━━━━━━━━━━━━━━━━━━━━━━
  In-game goods storefront
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
