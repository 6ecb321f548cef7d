use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larder_shopping::ShoppingListError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{1}")]
    Rejected(StatusCode, String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<larder_shared::Error> for AppError {
    fn from(err: larder_shared::Error) -> Self {
        match err {
            larder_shared::Error::Validate(errors) => AppError::ValidationError(errors.to_string()),
            err @ larder_shared::Error::NotFound(_) => AppError::NotFound(err.to_string()),
            larder_shared::Error::BadRequest(msg) => AppError::BadRequest(msg),
            larder_shared::Error::Unknown(err) => AppError::InternalError(err.to_string()),
        }
    }
}

impl From<ShoppingListError> for AppError {
    fn from(err: ShoppingListError) -> Self {
        larder_shared::Error::from(err).into()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected(status, _) => *status,
            AppError::InternalError(detail) => {
                tracing::error!(err = %detail, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
