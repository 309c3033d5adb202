use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::archive::handlers;
use crate::features::archive::services::ArchiveService;

/// Create routes for the archive feature
///
/// Note: these routes are public, like the dashboard pages that call them.
pub fn routes(service: Arc<ArchiveService>) -> Router {
    Router::new()
        .route("/api/archive", post(handlers::run_archive_sweep))
        .route("/api/archive/window", get(handlers::get_archive_window))
        .route("/api/arsip", get(handlers::list_archive_batches))
        .route("/api/arsip/export", get(handlers::export_archive))
        .with_state(service)
}
