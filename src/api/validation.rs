use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use validator::Validate;

use super::ApiError;
use crate::constants::pagination::MAX_PAGE_SIZE;
use crate::domain::PageRequest;

pub fn validate_pagination(page: u64, page_size: u64) -> Result<PageRequest, ApiError> {
    if page < 1 {
        return Err(ApiError::validation(format!(
            "Invalid page: {}. Page must be 1 or greater",
            page
        )));
    }

    if page_size > MAX_PAGE_SIZE {
        return Err(ApiError::validation(format!(
            "Invalid page size: {}. Page size must not exceed {}",
            page_size, MAX_PAGE_SIZE
        )));
    }

    let fits = (page - 1)
        .checked_mul(page_size)
        .is_some_and(|offset| i64::try_from(offset).is_ok());
    if !fits {
        return Err(ApiError::validation(format!(
            "Invalid page: {}. Page is out of range for page size {}",
            page, page_size
        )));
    }

    Ok(PageRequest::new(page, page_size))
}

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Malformed JSON and rule violations both reject with a 400 carrying
/// per-field messages, and are logged at WARN.
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                let message = rejection.body_text();
                tracing::warn!(reason = %message, "Invalid request body");
                ApiError::validation(message)
            })?;

        value.validate().map_err(|errors| {
            let fields = field_messages(&errors);
            tracing::warn!(?fields, "Request body failed validation");
            ApiError::invalid_fields(fields)
        })?;

        Ok(Validated(value))
    }
}

pub fn field_messages(errors: &validator::ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut result: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = result.entry(field.to_string()).or_default();
        for error in field_errors {
            messages.push(
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field '{field}'")),
            );
        }
    }
    result
}
