//! Role mode API handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{ApiResponse, SetRoleRequest, UserRole};
use crate::role_service::RoleService;

/// GET /api/role - Current persisted role mode
pub async fn get_role(
    State(role_service): State<Arc<RoleService>>,
) -> Result<Json<ApiResponse<UserRole>>, ApiError> {
    Ok(Json(ApiResponse::ok(role_service.current())))
}

/// PUT /api/role - Persist a new role mode
pub async fn set_role(
    State(role_service): State<Arc<RoleService>>,
    Json(request): Json<SetRoleRequest>,
) -> Result<Json<ApiResponse<UserRole>>, ApiError> {
    let role = role_service.set(&request.role)?;

    Ok(Json(ApiResponse::ok(role)))
}
