use std::sync::Arc;

use axum::{routing::post, Router};

use crate::core::config::AdminConfig;
use crate::features::auth::handlers;

/// Public token verification route
pub fn routes(admin: Arc<AdminConfig>) -> Router {
    Router::new()
        .route("/api/token/verify", post(handlers::verify_token))
        .with_state(admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server(token: Option<&str>) -> TestServer {
        let admin = Arc::new(AdminConfig {
            action_token: token.map(str::to_string),
        });
        TestServer::new(routes(admin)).unwrap()
    }

    #[tokio::test]
    async fn test_verify_accepts_trimmed_token() {
        let server = server(Some("rahasia"));

        let response = server
            .post("/api/token/verify")
            .json(&json!({ "token": "  rahasia " }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["valid"], true);
    }

    #[tokio::test]
    async fn test_verify_rejects_wrong_token() {
        let server = server(Some("rahasia"));

        let response = server
            .post("/api/token/verify")
            .json(&json!({ "token": "tebakan" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_verify_requires_token() {
        let server = server(Some("rahasia"));

        for body in [json!({}), json!({ "token": "   " })] {
            let response = server.post("/api/token/verify").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["message"], "Token diperlukan.");
        }
    }

    #[tokio::test]
    async fn test_verify_treats_unreadable_body_as_missing_token() {
        let server = server(Some("rahasia"));

        let response = server.post("/api/token/verify").text("bukan json").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Token diperlukan.");
    }

    #[tokio::test]
    async fn test_unconfigured_server_reported_before_missing_token() {
        let server = server(None);

        for body in [json!({}), json!({ "token": "  " })] {
            let response = server.post("/api/token/verify").json(&body).await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            let body: Value = response.json();
            assert_eq!(
                body["message"],
                "Konfigurasi server belum lengkap. Hubungi administrator."
            );
        }
    }

    #[tokio::test]
    async fn test_verify_without_configured_token() {
        let server = server(None);

        let response = server
            .post("/api/token/verify")
            .json(&json!({ "token": "rahasia" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Konfigurasi server belum lengkap. Hubungi administrator."
        );
    }
}
