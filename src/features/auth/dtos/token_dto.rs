use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for token verification
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VerifyTokenDto {
    /// Admin action token as typed by the user
    #[serde(default)]
    pub token: Option<String>,
}

/// Response DTO for a verified token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyTokenResponseDto {
    pub valid: bool,
}
