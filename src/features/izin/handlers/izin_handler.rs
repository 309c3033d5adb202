use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::archive::ArchiveService;
use crate::features::izin::dtos::{
    CreateIzinDto, DeleteIzinResponseDto, IzinResponseDto, IzinSummaryDto, ListIzinQuery,
};
use crate::features::izin::services::IzinService;
use crate::shared::types::{ApiResponse, Meta};

/// State for izin handlers
#[derive(Clone)]
pub struct IzinState {
    pub izin_service: Arc<IzinService>,
    pub archive_service: Arc<ArchiveService>,
}

/// List izin
///
/// Runs the archive sweep first (best effort) so that a dashboard load after
/// Friday 15:00 sees the week's requests already archived.
#[utoipa::path(
    get,
    path = "/api/izin",
    params(ListIzinQuery),
    responses(
        (status = 200, description = "Izin, newest first", body = ApiResponse<Vec<IzinResponseDto>>),
        (status = 500, description = "Failed to load izin")
    ),
    tag = "izin"
)]
pub async fn list_izin(
    State(state): State<IzinState>,
    AppQuery(query): AppQuery<ListIzinQuery>,
) -> Result<Json<ApiResponse<Vec<IzinResponseDto>>>> {
    state.archive_service.sweep_best_effort().await;

    let izin = state
        .izin_service
        .list(query.archived)
        .await
        .map_err(|e| e.localized("Gagal mengambil data izin"))?;
    let total = izin.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(izin),
        None,
        Some(Meta { total }),
    )))
}

/// Submit a leave request
#[utoipa::path(
    post,
    path = "/api/izin",
    request_body = CreateIzinDto,
    responses(
        (status = 201, description = "Izin submitted", body = ApiResponse<IzinResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "izin"
)]
pub async fn create_izin(
    State(state): State<IzinState>,
    AppJson(dto): AppJson<CreateIzinDto>,
) -> Result<(StatusCode, Json<ApiResponse<IzinResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let izin = state
        .izin_service
        .create(dto)
        .await
        .map_err(|e| e.localized("Gagal menyimpan izin"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(izin),
            Some("Izin berhasil dikirim.".to_string()),
            None,
        )),
    ))
}

/// Izin counts for the dashboard cards
#[utoipa::path(
    get,
    path = "/api/izin/summary",
    responses(
        (status = 200, description = "Summary counts", body = ApiResponse<IzinSummaryDto>)
    ),
    tag = "izin"
)]
pub async fn get_izin_summary(
    State(state): State<IzinState>,
) -> Result<Json<ApiResponse<IzinSummaryDto>>> {
    let summary = state
        .izin_service
        .summary()
        .await
        .map_err(|e| e.localized("Gagal mengambil data izin"))?;

    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Approve a leave request
#[utoipa::path(
    patch,
    path = "/api/izin/{id}",
    params(
        ("id" = Uuid, Path, description = "Izin ID")
    ),
    responses(
        (status = 200, description = "Izin approved", body = ApiResponse<IzinResponseDto>),
        (status = 401, description = "Invalid action token"),
        (status = 404, description = "Izin not found")
    ),
    security(("action_token" = [])),
    tag = "izin"
)]
pub async fn approve_izin(
    State(state): State<IzinState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<IzinResponseDto>>> {
    let izin = state
        .izin_service
        .approve(id)
        .await
        .map_err(|e| e.localized("Gagal mengubah status izin"))?;

    Ok(Json(ApiResponse::success(Some(izin), None, None)))
}

/// Delete a leave request
#[utoipa::path(
    delete,
    path = "/api/izin/{id}",
    params(
        ("id" = Uuid, Path, description = "Izin ID")
    ),
    responses(
        (status = 200, description = "Izin deleted", body = ApiResponse<DeleteIzinResponseDto>),
        (status = 401, description = "Invalid action token"),
        (status = 404, description = "Izin not found")
    ),
    security(("action_token" = [])),
    tag = "izin"
)]
pub async fn delete_izin(
    State(state): State<IzinState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteIzinResponseDto>>> {
    state
        .izin_service
        .delete(id)
        .await
        .map_err(|e| e.localized("Gagal menghapus izin"))?;

    Ok(Json(ApiResponse::success(
        Some(DeleteIzinResponseDto { id }),
        None,
        None,
    )))
}
