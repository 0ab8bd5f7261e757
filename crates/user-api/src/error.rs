use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use user_core::DomainError;
use user_proto::{Code, Status};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound(msg) => Status::not_found(msg.clone()),
            ApiError::InvalidArgument(msg) => Status::invalid_argument(msg.clone()),
            ApiError::Unavailable(msg) => Status::unavailable(msg.clone()),
            ApiError::Internal(msg) => Status::internal(msg.clone()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            DomainError::DatabaseUnavailable(msg) => ApiError::Unavailable(msg),
            DomainError::DatabaseError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status.code {
            Code::NotFound | Code::InvalidArgument => {
                tracing::warn!("{}: {}", status.code, status.message)
            }
            Code::Unavailable | Code::Internal => {
                tracing::error!("{}: {}", status.code, status.message)
            }
        }

        let http = StatusCode::from_u16(status.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (http, Json(status)).into_response()
    }
}
