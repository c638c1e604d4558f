//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::FieldError;

/// Extract and validate the `{id}` path parameter.
///
/// Every single-resource route validates the id as present and numeric
/// before any repository call; failures produce the full 422 rule list.
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(vec![
                    FieldError::params("id", "id is required"),
                    FieldError::params("id", "id should be numeric"),
                ])
            })?;

        let mut errors = Vec::new();
        if raw.is_empty() {
            errors.push(FieldError::params("id", "id is required"));
        }
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            errors.push(FieldError::params("id", "id should be numeric"));
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        // All digits but too large for i64 still fails the numeric rule.
        let id = raw.parse().map_err(|_| {
            ApiError::Validation(vec![FieldError::params("id", "id should be numeric")])
        })?;
        Ok(Self(id))
    }
}

/// Extract the raw JSON body for rule-based validation.
///
/// Malformed JSON maps to the 400 `Invalid JSON` response. A request without
/// a JSON content-type is treated as an empty object, so the validation
/// layer reports the missing fields instead of a parse failure.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                Ok(Self(Value::Object(Map::new())))
            }
            Err(_) => Err(ApiError::InvalidJson),
        }
    }
}
