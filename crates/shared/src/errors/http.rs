use crate::{
    errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError},
    validation::{FieldError, ValidationErrorResponse},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// The only layer that maps an error kind to an HTTP status and a
/// client-safe message.
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Validation(Vec<FieldError>),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                other => HttpError::Internal(other.to_string()),
            },

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            HttpError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(msg))).into_response()
            }
            HttpError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse::new(errors)),
            )
                .into_response(),
            // Internal detail goes to the log, never to the client.
            HttpError::Internal(msg) => {
                error!("❌ Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("internal server error")),
                )
                    .into_response()
            }
        }
    }
}
