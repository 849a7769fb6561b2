//! HTTP API Module
//!
//! The request-handling surface of the service.
//!
//! ## Endpoints
//! - `GET /` — static HTML page (presentation only).
//! - `GET /companies` — distinct company names.
//! - `GET /company/:name` — all records for one company, missing values
//!   rendered as `"No Data"`.
//!
//! Handlers receive the shared [`Dataset`](crate::dataset::types::Dataset)
//! through an `Extension<Arc<Dataset>>` layer. Failures are expressed as
//! [`ApiError`](types::ApiError) values that render to the JSON error bodies
//! and HTTP statuses of the API contract.

pub mod handlers;
pub mod types;
