use axum::{
    Json,
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use crate::{
    dto::{HEALTH_BODY, HealthResponse, NotificationRequest, NotifyResponse, SENT_BODY},
    error::NotifyError,
    service,
};

#[derive(OpenApi)]
#[openapi(
    paths(health_check, notify),
    components(schemas(HealthResponse, NotificationRequest, NotifyResponse)),
    tags(
        (name = "notifications", description = "Notification intake API")
    )
)]
pub struct ApiDoc;

fn json_response(body: &'static str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "notifications"
)]
#[debug_handler]
pub async fn health_check() -> Response {
    json_response(HEALTH_BODY)
}

#[utoipa::path(
    post,
    path = "/notify",
    request_body = NotificationRequest,
    responses(
        (status = 200, description = "Notification accepted", body = NotifyResponse),
        (status = 400, description = "invalid json (including bodies over the size limit), invalid email or message cannot be empty", body = String, content_type = "text/plain")
    ),
    tag = "notifications"
)]
#[debug_handler]
pub async fn notify(body: Result<Bytes, BytesRejection>) -> Response {
    let result = body
        .map_err(NotifyError::from)
        .and_then(|body| service::decode(&body))
        .and_then(|request| service::submit(&request));

    match result {
        Ok(()) => json_response(SENT_BODY),
        Err(e) => e.into_response(),
    }
}

#[debug_handler]
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
