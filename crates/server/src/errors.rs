use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::Serialize;
use service::errors::{ErrorKind, ServiceError};
use thiserror::Error;
use tracing::{error, warn};

/// Body of every error response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotAssociated => StatusCode::PRECONDITION_FAILED,
        ErrorKind::Infrastructure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let status = status_for(e.kind());
        if e.is_business() {
            warn!(code = e.code(), status = status.as_u16(), err = %e, "request rejected");
        } else {
            error!(code = e.code(), err = %e, "store failure");
        }
        Self::new(status, e.to_string())
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self { ServiceError::from(e).into() }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { Self::new(StatusCode::BAD_REQUEST, r.body_text()) }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { status_code: self.status.as_u16(), message: self.message };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
