//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::dashboard: Summary cards and transactions table

pub mod error;
pub mod routes;

use axum::{http::Uri, routing::get, Router};
use gofinances_config::Config;
use gofinances_core::ApiRef;
use gofinances_utils::Locale;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub api: ApiRef,
    pub config: Config,
    pub locale: Locale,
}

impl AppState {
    pub fn new(config: Config, api: ApiRef) -> Self {
        let locale = config.locale();
        Self { api, config, locale }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::dashboard::{api_dashboard, htmx_dashboard_content, page_dashboard};

    let json_api = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/dashboard", get(api_dashboard))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(json_api)
        // HTMX page routes
        .route("/", get(page_dashboard))
        .route("/dashboard", get(page_dashboard))
        // HTMX partial routes
        .route("/dashboard/content", get(htmx_dashboard_content))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: uri.path().to_string(),
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - GoFinances</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100 text-gray-800">
    {}
</body>
</html>"#,
        gofinances_utils::escape_html(title),
        content
    )
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    let main = format!(
        "<main class='max-w-6xl mx-auto px-5 py-10'>{}</main>",
        inner_content
    );
    if is_htmx_request(headers) {
        main
    } else {
        base_html(title, &main)
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until the process is
/// interrupted.
pub async fn start_server(config: Config, api: ApiRef) -> std::io::Result<()> {
    let addr = config.bind_address();
    let state = AppState::new(config, api);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting GoFinances dashboard on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /dashboard/content (HTMX fragment)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
