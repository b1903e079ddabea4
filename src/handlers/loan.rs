//! Loan application API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::loan_service::LoanService;
use crate::models::{
    ApiResponse, CreateLoanRequest, ListLoansQuery, LoanApplication, SetStatusRequest,
    StatusFilter, UserRole,
};
use crate::services::filter_applications;

/// Query marking who is submitting: `?as=admin` stamps `adminSubmitted`.
#[derive(Debug, Deserialize, Default)]
pub struct SubmitQuery {
    #[serde(rename = "as")]
    pub submitted_as: Option<String>,
}

/// POST /api/loans - Submit a new loan application
pub async fn create_loan(
    State(loan_service): State<Arc<LoanService>>,
    Query(query): Query<SubmitQuery>,
    Json(request): Json<CreateLoanRequest>,
) -> Result<Json<ApiResponse<LoanApplication>>, ApiError> {
    let role = match query.submitted_as.as_deref() {
        Some("admin") => UserRole::Admin,
        _ => UserRole::User,
    };

    let application = loan_service.submit(request, role)?;

    Ok(Json(ApiResponse::ok(application)))
}

/// GET /api/loans - List applications, optionally filtered by status and a
/// free-text search over applicant name and id
pub async fn list_loans(
    State(loan_service): State<Arc<LoanService>>,
    Query(query): Query<ListLoansQuery>,
) -> Result<Json<ApiResponse<Vec<LoanApplication>>>, ApiError> {
    let status = match query.status.as_deref() {
        None => StatusFilter::All,
        Some(raw) => StatusFilter::parse(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown status filter: {}", raw)))?,
    };
    let search = query.search.unwrap_or_default();

    let applications = loan_service.list();
    let filtered = filter_applications(&applications, status, &search);

    Ok(Json(ApiResponse::ok(filtered)))
}

/// GET /api/loans/mine - The self-service applicant view
pub async fn list_my_loans(
    State(loan_service): State<Arc<LoanService>>,
) -> Result<Json<ApiResponse<Vec<LoanApplication>>>, ApiError> {
    Ok(Json(ApiResponse::ok(loan_service.list_for_current_user())))
}

/// GET /api/loans/:id - Fetch a single application
pub async fn get_loan(
    State(loan_service): State<Arc<LoanService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<LoanApplication>>, ApiError> {
    Ok(Json(ApiResponse::ok(loan_service.get(&id)?)))
}

/// PUT /api/loans/:id/status - Transition an application's status
pub async fn set_loan_status(
    State(loan_service): State<Arc<LoanService>>,
    Path(id): Path<String>,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<ApiResponse<LoanApplication>>, ApiError> {
    let updated = loan_service.set_status(&id, &request.status)?;

    Ok(Json(ApiResponse::ok(updated)))
}

/// DELETE /api/loans/:id - Remove an application outright
pub async fn delete_loan(
    State(loan_service): State<Arc<LoanService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    loan_service.delete(&id)?;

    Ok(Json(ApiResponse::ok(())))
}
