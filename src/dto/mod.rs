use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /notify`. Lives for a single request.
///
/// Absent fields decode as empty strings and are left to validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NotificationRequest {
    /// Recipient address
    #[schema(example = "test@example.com")]
    pub email: String,
    /// Notification text, must not be empty
    #[schema(example = "hi")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok`
    pub status: String,
    /// Service name
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotifyResponse {
    /// Always `sent`
    pub status: String,
}

/// Exact bytes returned by `GET /health`.
pub const HEALTH_BODY: &str = r#"{"status": "ok", "service": "notification-service"}"#;

/// Exact bytes returned by a successful `POST /notify`.
pub const SENT_BODY: &str = r#"{"status": "sent"}"#;
