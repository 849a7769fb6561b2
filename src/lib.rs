//! Record Service Library
//!
//! This library crate defines the modules behind the stock-index record API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two subsystems:
//!
//! - **`dataset`**: The in-memory data layer. Loads the CSV source once at startup
//!   into an immutable, typed `Dataset` and answers the two query operations
//!   (distinct company names, per-company record selection).
//! - **`api`**: The HTTP surface. Axum handlers, response DTOs, and the error type
//!   that maps query failures onto HTTP statuses and JSON error bodies.

pub mod api;
pub mod dataset;
