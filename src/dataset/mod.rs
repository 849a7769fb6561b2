//! Dataset Module
//!
//! Holds the process-wide, read-only table of stock-index records.
//!
//! ## Core Concepts
//! - **Typed cells**: Every CSV field is parsed into a `CellValue` at load time.
//!   Missing values are an explicit variant, never a sentinel string.
//! - **Single load**: `loader::load_dataset` runs once at startup. The resulting
//!   `Dataset` is shared behind an `Arc` and never mutated afterwards, so
//!   concurrent request handlers read it without locking.
//! - **Queries**: Distinct company names and exact-match per-company selection.
//!   The `"No Data"` placeholder is substituted only when a record is rendered
//!   to JSON for a client, leaving the stored data untouched.

pub mod loader;
pub mod types;
