use axum::extract::{Extension, Path};
use axum::response::Html;
use axum::Json;
use serde_json::{Map, Value};
use std::sync::Arc;

use super::types::{ApiError, CompaniesResponse};
use crate::dataset::types::Dataset;

pub async fn handle_home() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

pub async fn handle_list_companies(
    Extension(dataset): Extension<Arc<Dataset>>,
) -> Result<Json<CompaniesResponse>, ApiError> {
    if dataset.is_empty() {
        tracing::warn!("Companies listing requested but the dataset is empty");
        return Err(ApiError::NoCompanyData);
    }

    Ok(Json(CompaniesResponse {
        companies: dataset.company_names(),
    }))
}

pub async fn handle_company_records(
    Path(name): Path<String>,
    Extension(dataset): Extension<Arc<Dataset>>,
) -> Result<Json<Vec<Map<String, Value>>>, ApiError> {
    if dataset.is_empty() {
        tracing::warn!("Company query for '{}' but the dataset is empty", name);
        return Err(ApiError::NoData);
    }

    let matches = dataset.records_for(&name);
    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    let rows = matches
        .into_iter()
        .map(|record| dataset.record_json(record))
        .collect();

    Ok(Json(rows))
}
