use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::middleware::ACTION_TOKEN_HEADER;
use crate::features::archive::{dtos as archive_dtos, handlers as archive_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::izin::{dtos as izin_dtos, handlers as izin_handlers, models as izin_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Izin
        izin_handlers::list_izin,
        izin_handlers::create_izin,
        izin_handlers::get_izin_summary,
        izin_handlers::approve_izin,
        izin_handlers::delete_izin,
        // Archive
        archive_handlers::run_archive_sweep,
        archive_handlers::get_archive_window,
        archive_handlers::list_archive_batches,
        archive_handlers::export_archive,
        // Token
        auth_handlers::verify_token,
    ),
    components(
        schemas(
            Meta,
            // Izin
            izin_models::IzinKelas,
            izin_models::IzinStatus,
            izin_dtos::CreateIzinDto,
            izin_dtos::IzinResponseDto,
            izin_dtos::KelasCountDto,
            izin_dtos::IzinSummaryDto,
            izin_dtos::DeleteIzinResponseDto,
            ApiResponse<izin_dtos::IzinResponseDto>,
            ApiResponse<Vec<izin_dtos::IzinResponseDto>>,
            ApiResponse<izin_dtos::IzinSummaryDto>,
            ApiResponse<izin_dtos::DeleteIzinResponseDto>,
            // Archive
            archive_dtos::SweepResponseDto,
            archive_dtos::ArchiveWindowDto,
            archive_dtos::ArchiveBatchDto,
            ApiResponse<archive_dtos::ArchiveWindowDto>,
            // Token
            auth_dtos::VerifyTokenDto,
            auth_dtos::VerifyTokenResponseDto,
            ApiResponse<auth_dtos::VerifyTokenResponseDto>,
        )
    ),
    tags(
        (name = "izin", description = "Leave request submission and approval"),
        (name = "archive", description = "Friday archive sweep, batches and XLSX export"),
        (name = "token", description = "Admin action token verification"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Pramuka Izin API",
        version = "0.1.0",
        description = "API documentation for the Pramuka leave request service",
    )
)]
pub struct ApiDoc;

/// Adds the admin action token header scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "action_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ACTION_TOKEN_HEADER))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/izin",
            "/api/izin/summary",
            "/api/izin/{id}",
            "/api/archive",
            "/api/archive/window",
            "/api/arsip",
            "/api/arsip/export",
            "/api/token/verify",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_action_token_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("action_token"));
    }
}
