use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::BookingError;
use models::validation::ValidationErrors;
use sea_orm::DbErr;
use serde_json::json;

/// Error type returned by all handlers, mapped to the wire format
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    Validation(ValidationErrors),
    Internal,
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        log::error!("database error: {err}");
        ApiError::Internal
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::MovieNotFound => ApiError::NotFound("Movie"),
            BookingError::NotFound(resource) => ApiError::NotFound(resource),
            BookingError::Validation(errors) => ApiError::Validation(errors),
            BookingError::Db(err) => err.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{resource} not found") })),
            )
                .into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response(),
        }
    }
}
