use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Everything that can stop a notification request from being acknowledged.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("invalid json")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid email")]
    InvalidEmail,

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("failed to read request body: {0}")]
    BodyRead(BytesRejection),
}

impl From<BytesRejection> for NotifyError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::BodyRead(rejection)
        }
    }
}

impl NotifyError {
    /// Every rejection is a client error.
    pub const fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Plain-text reason sent to the client.
    pub const fn reason(&self) -> &'static str {
        match self {
            // A cut-off or unreadable body looks like truncated JSON to the client
            Self::InvalidJson(_) | Self::BodyRead(_) | Self::PayloadTooLarge => "invalid json",
            Self::InvalidEmail => "invalid email",
            Self::EmptyMessage => "message cannot be empty",
        }
    }
}

impl IntoResponse for NotifyError {
    fn into_response(self) -> Response {
        match &self {
            Self::BodyRead(_) => tracing::warn!("{self}"),
            _ => tracing::debug!("rejecting notification: {self}"),
        }
        (self.status(), self.reason()).into_response()
    }
}
