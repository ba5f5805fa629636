//! Dashboard JSON API and HTMX endpoints
//!
//! Both endpoints are one activation each: a new view, one upstream read.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use gofinances_core::{DashboardSnapshot, TransactionsView};

use super::page::render_dashboard;
use crate::{ApiError, AppState};

/// Build a view and run its single fetch
async fn activated_view(state: &AppState, operation: &str) -> Result<TransactionsView, ApiError> {
    let mut view = TransactionsView::new(state.api.clone(), state.locale.clone());
    if let Err(e) = view.activate().await {
        e.log(operation);
        return Err(e.into());
    }
    log::debug!("{}: loaded {} transactions", operation, view.transactions().len());
    Ok(view)
}

/// HTMX fragment that replaces the loading dashboard
pub async fn htmx_dashboard_content(state: State<AppState>) -> Result<Html<String>, ApiError> {
    let view = activated_view(&state, "htmx_dashboard_content").await?;
    Ok(Html(render_dashboard(&view)))
}

/// Loaded dashboard as JSON
pub async fn api_dashboard(state: State<AppState>) -> Result<Json<DashboardSnapshot>, ApiError> {
    let view = activated_view(&state, "api_dashboard").await?;
    Ok(Json(view.snapshot()))
}
