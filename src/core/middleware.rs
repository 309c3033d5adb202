use crate::core::config::AdminConfig;
use crate::core::error::AppError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the admin action token
pub const ACTION_TOKEN_HEADER: &str = "x-action-token";

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        // Parse origins into HeaderValue
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

/// Gate for admin actions on izin.
///
/// The `x-action-token` header must equal the configured `ADMIN_ACTION_TOKEN`.
pub async fn action_token_middleware(
    State(admin): State<Arc<AdminConfig>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ACTION_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok());
    verify_action_token(&admin, provided)?;
    Ok(next.run(req).await)
}

/// The configured admin token, or a 500 when `ADMIN_ACTION_TOKEN` is unset
pub fn configured_action_token(admin: &AdminConfig) -> Result<&str, AppError> {
    admin.action_token.as_deref().ok_or_else(|| {
        tracing::error!("ADMIN_ACTION_TOKEN belum dikonfigurasi.");
        AppError::Misconfigured(
            "Konfigurasi server belum lengkap. Hubungi administrator.".to_string(),
        )
    })
}

/// Compare a caller-supplied token against the configured one
pub fn verify_action_token(admin: &AdminConfig, provided: Option<&str>) -> Result<(), AppError> {
    let configured = configured_action_token(admin)?;

    match provided.map(str::trim) {
        Some(token) if !token.is_empty() && token == configured => Ok(()),
        _ => Err(AppError::Unauthorized("Token tidak valid.".to_string())),
    }
}
