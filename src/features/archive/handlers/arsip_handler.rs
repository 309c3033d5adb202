use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::archive::dtos::{ArchiveBatchDto, ArsipQuery, ExportQuery};
use crate::features::archive::services::read_model::ExportFilter;
use crate::features::archive::services::ArchiveService;
use crate::shared::constants::XLSX_CONTENT_TYPE;

/// List archived izin grouped by archive date
///
/// Returns a bare array so the timeline can iterate it directly.
#[utoipa::path(
    get,
    path = "/api/arsip",
    params(ArsipQuery),
    responses(
        (status = 200, description = "Archive batches, newest first", body = Vec<ArchiveBatchDto>),
        (status = 500, description = "Failed to load archive")
    ),
    tag = "archive"
)]
pub async fn list_archive_batches(
    State(service): State<Arc<ArchiveService>>,
    AppQuery(query): AppQuery<ArsipQuery>,
) -> Result<Json<Vec<ArchiveBatchDto>>> {
    let batches = service
        .batches()
        .await
        .map_err(|e| e.localized("Gagal memuat arsip Jumat"))?;

    Ok(Json(
        batches
            .iter()
            .map(|b| ArchiveBatchDto::from_batch(b, query.status))
            .collect(),
    ))
}

/// Download archived izin as an XLSX file
///
/// Parameters are validated before the archive is read.
#[utoipa::path(
    get,
    path = "/api/arsip/export",
    params(ExportQuery),
    responses(
        (status = 200, description = "Spreadsheet attachment", body = Vec<u8>, content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 400, description = "Invalid archiveDate or status"),
        (status = 404, description = "No archived izin for the requested filter"),
        (status = 500, description = "Failed to build spreadsheet")
    ),
    tag = "archive"
)]
pub async fn export_archive(
    State(service): State<Arc<ArchiveService>>,
    AppQuery(query): AppQuery<ExportQuery>,
) -> Result<Response> {
    let filter = ExportFilter::parse(query.archive_date.as_deref(), query.status.as_deref())?;

    let file = service
        .export(&filter)
        .await
        .map_err(|e| e.localized("Gagal menghasilkan arsip XLSX."))?;

    let disposition = format!("attachment; filename=\"{}\"", file.filename);

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response())
}
