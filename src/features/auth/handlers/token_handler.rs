use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::core::config::AdminConfig;
use crate::core::error::{AppError, Result};
use crate::core::middleware::{configured_action_token, verify_action_token};
use crate::features::auth::dtos::{VerifyTokenDto, VerifyTokenResponseDto};
use crate::shared::types::ApiResponse;

/// Verify an admin action token
///
/// Lets the dashboard unlock approve/delete buttons without attempting an
/// action first. Server configuration is checked before the body, and an
/// unreadable body counts as a missing token.
#[utoipa::path(
    post,
    path = "/api/token/verify",
    request_body = VerifyTokenDto,
    responses(
        (status = 200, description = "Token accepted", body = ApiResponse<VerifyTokenResponseDto>),
        (status = 400, description = "Token missing"),
        (status = 401, description = "Token rejected"),
        (status = 500, description = "Token not configured on the server")
    ),
    tag = "token"
)]
pub async fn verify_token(
    State(admin): State<Arc<AdminConfig>>,
    payload: std::result::Result<Json<VerifyTokenDto>, JsonRejection>,
) -> Result<Json<ApiResponse<VerifyTokenResponseDto>>> {
    configured_action_token(&admin)?;

    let dto = payload.map(|Json(dto)| dto).unwrap_or_default();
    let token = dto.token.as_deref().map(str::trim).unwrap_or_default();
    if token.is_empty() {
        return Err(AppError::BadRequest("Token diperlukan.".to_string()));
    }

    verify_action_token(&admin, Some(token))?;

    Ok(Json(ApiResponse::success(
        Some(VerifyTokenResponseDto { valid: true }),
        None,
        None,
    )))
}
