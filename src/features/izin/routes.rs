use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch},
    Router,
};

use crate::core::config::AdminConfig;
use crate::core::middleware;
use crate::features::archive::ArchiveService;
use crate::features::izin::handlers::{self, IzinState};
use crate::features::izin::services::IzinService;

/// Create routes for the izin feature
///
/// Listing, submission and summary are public; approve and delete require
/// the `x-action-token` header.
pub fn routes(
    izin_service: Arc<IzinService>,
    archive_service: Arc<ArchiveService>,
    admin: Arc<AdminConfig>,
) -> Router {
    let state = IzinState {
        izin_service,
        archive_service,
    };

    let admin_routes = Router::new()
        .route(
            "/api/izin/{id}",
            patch(handlers::approve_izin).delete(handlers::delete_izin),
        )
        .route_layer(from_fn_with_state(
            admin,
            middleware::action_token_middleware,
        ));

    Router::new()
        .route(
            "/api/izin",
            get(handlers::list_izin).post(handlers::create_izin),
        )
        .route("/api/izin/summary", get(handlers::get_izin_summary))
        .merge(admin_routes)
        .with_state(state)
}
