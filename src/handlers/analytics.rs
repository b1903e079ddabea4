//! Dashboard analytics API handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::loan_service::LoanService;
use crate::models::ApiResponse;
use crate::services::{compute_dashboard, DashboardSnapshot};

/// GET /api/analytics - Derive the dashboard snapshot from the current
/// record list. Recomputed on every call; nothing is cached or stored.
pub async fn get_analytics(
    State(loan_service): State<Arc<LoanService>>,
) -> Result<Json<ApiResponse<DashboardSnapshot>>, ApiError> {
    let applications = loan_service.list();
    let snapshot = compute_dashboard(&applications);

    Ok(Json(ApiResponse::ok(snapshot)))
}
