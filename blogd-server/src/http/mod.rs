//! HTTP layer - error normalization, extractors, and per-entity routes

pub mod error;
pub mod extractors;
pub mod routes;

use serde::Serialize;

/// The `{result, data}` wrapper placed around every successful JSON body.
/// `result` echoes the HTTP status code.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub result: u16,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { result: 200, data }
    }

    pub fn created(data: T) -> Self {
        Self { result: 201, data }
    }
}
