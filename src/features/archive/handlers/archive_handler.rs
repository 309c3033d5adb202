use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::archive::dtos::{ArchiveWindowDto, SweepResponseDto};
use crate::features::archive::services::ArchiveService;
use crate::shared::types::ApiResponse;

/// Run the Friday archive sweep
///
/// Safe to call any number of times: outside Friday 15:00-23:59 (Asia/Jakarta)
/// it reports `skipped`, and inside the window rows are archived only once.
/// The body is the bare outcome, not the `ApiResponse` envelope.
#[utoipa::path(
    post,
    path = "/api/archive",
    responses(
        (status = 200, description = "Sweep finished or skipped", body = SweepResponseDto),
        (status = 500, description = "Sweep failed")
    ),
    tag = "archive"
)]
pub async fn run_archive_sweep(
    State(service): State<Arc<ArchiveService>>,
) -> Result<Json<SweepResponseDto>> {
    let outcome = service
        .sweep()
        .await
        .map_err(|e| e.localized("Gagal memindahkan izin ke arsip"))?;

    Ok(Json(outcome.into()))
}

/// Get the current archive window
#[utoipa::path(
    get,
    path = "/api/archive/window",
    responses(
        (status = 200, description = "Current window", body = ApiResponse<ArchiveWindowDto>)
    ),
    tag = "archive"
)]
pub async fn get_archive_window(
    State(service): State<Arc<ArchiveService>>,
) -> Json<ApiResponse<ArchiveWindowDto>> {
    Json(ApiResponse::success(Some(service.window().into()), None, None))
}
