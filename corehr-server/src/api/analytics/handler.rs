//! Analytics API Handlers

use axum::{Json, extract::State};

use crate::analytics;
use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::AnalyticsData;

/// Full analytics snapshot, recomputed from the current employee list
pub async fn get_analytics(State(state): State<ServerState>) -> AppResult<Json<AnalyticsData>> {
    let employees = state.employees.list()?;
    let today = chrono::Utc::now().date_naive();
    Ok(Json(analytics::compute(&employees, today)))
}
