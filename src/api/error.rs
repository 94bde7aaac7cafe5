use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;
use std::fmt;

use super::ErrorResponse;
use crate::services::AnimeError;

/// Message returned for every 5xx; the cause only goes to the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::ValidationError { message, .. } => {
                write!(f, "Validation error: {}", message)
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::NotFound(msg) => ErrorResponse::new(msg),
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }
            ApiError::ValidationError { message, fields } => {
                if fields.is_empty() {
                    ErrorResponse::new(message)
                } else {
                    ErrorResponse::with_fields(message, fields)
                }
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<AnimeError> for ApiError {
    fn from(err: AnimeError) -> Self {
        match &err {
            AnimeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AnimeError::Persistence(msg) => ApiError::DatabaseError(msg.clone()),
        }
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError {
            message: msg.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn invalid_fields(fields: BTreeMap<String, Vec<String>>) -> Self {
        ApiError::ValidationError {
            message: "One or more validation errors occurred".to_string(),
            fields,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::InternalError(msg.into())
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnimeId;

    #[test]
    fn anime_errors_map_to_status_codes() {
        let not_found: ApiError = AnimeError::NotFound(AnimeId::new(9)).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert!(not_found.to_string().contains("Id: 9"));

        let persistence: ApiError = AnimeError::Persistence("locked".to_string()).into();
        assert_eq!(persistence.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_details_are_not_returned() {
        let response = ApiError::DatabaseError("no such table: animes".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_status_matches_variant() {
        let errors = [
            ApiError::NotFound("Anime not found. Id: 3".to_string()),
            ApiError::validation("Invalid page: 0"),
            ApiError::DatabaseError("locked".to_string()),
            ApiError::internal("bad header"),
        ];
        for err in errors {
            let expected = err.status();
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
