//! API error types with IntoResponse
//!
//! A closed set of error kinds with a total status mapping. This is the
//! single place that writes error responses: handlers propagate with `?`
//! and never write after forwarding. Every non-validation error is logged
//! before the response goes out.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::FieldError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// One or more request validation rules failed (422)
    Validation(Vec<FieldError>),

    /// Request body was not parseable JSON (400)
    InvalidJson,

    /// Marked-unauthorized error (401); supported but unused by any route
    Unauthorized,

    /// Single-resource lookup or keyed mutation found nothing (404, empty body)
    NotFound,

    /// No route matched the request path (404, catch-all body)
    RouteMissing,

    /// Database failure, including constraint violations (500)
    Database(DbError),
}

impl ApiError {
    /// Total mapping from error kind to response status.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound | Self::RouteMissing => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errors) => {
                (status, Json(json!({ "errors": errors }))).into_response()
            }
            Self::InvalidJson => {
                tracing::error!("request body is not valid JSON");
                (status, Json(json!({ "message": "Invalid JSON" }))).into_response()
            }
            Self::Unauthorized => {
                tracing::error!("unauthorized request");
                (status, Json(json!({ "message": "Unauthorized" }))).into_response()
            }
            // Written directly by the single-resource routes; no body.
            Self::NotFound => status.into_response(),
            Self::RouteMissing => {
                tracing::error!("no route matched");
                (status, Json(json!({ "message": "Internal Server Error" }))).into_response()
            }
            Self::Database(e) => {
                // Log the actual error, return the generic message
                tracing::error!("database error: {}", e);
                (status, Json(json!({ "message": "Internal Server Error" }))).into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}
