//! Route handler functions for all endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{NavigationEntry, OverviewData};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub started_at: DateTime<Utc>,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET / - the rendered dashboard document.
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = stockroom_ui::render_dashboard(&state.config.dashboard, state.provider.as_ref())?;
    Ok(Html(html))
}

/// GET /health - liveness and uptime.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        started_at: state.started_at,
    })
}

/// GET /api/overview - the dataset behind the overview page.
pub async fn overview(State(state): State<AppState>) -> Result<Json<OverviewData>, ApiError> {
    Ok(Json(state.provider.overview()?))
}

/// GET /api/navigation - sidebar entries in display order.
pub async fn navigation(State(state): State<AppState>) -> Json<Vec<NavigationEntry>> {
    Json(state.provider.navigation())
}

/// POST /actions/navigate/{slug} - invoke the navigation hook.
pub async fn navigate(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    let entry = state
        .provider
        .navigation()
        .into_iter()
        .find(|e| e.slug() == slug)
        .ok_or_else(|| ApiError::NotFound(format!("No navigation entry '{}'", slug)))?;

    state.actions.navigate(&entry);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /actions/logout - invoke the logout hook.
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.actions.logout();
    StatusCode::NO_CONTENT
}
