//! API Data Types
//!
//! Response DTOs for the HTTP surface and the request-path error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Success body of `GET /companies`.
#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<String>,
}

/// Error body shared by every failing endpoint. Carries only the public
/// message, never internal detail.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request-path failures. Each is local to the request that raised it and
/// maps onto exactly one HTTP status and error body.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// Dataset is empty; raised by the companies listing.
    #[error("No company data available")]
    NoCompanyData,
    /// Dataset is empty; raised by the per-company query.
    #[error("No data available")]
    NoData,
    /// No record matched the requested company name.
    #[error("Company not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoCompanyData | ApiError::NoData => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
