//! Axum route handlers for the Search API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::Developer;
use crate::search::validation::{validate_search_query, FieldError};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub search_id: i32,
    pub results: Vec<Developer>,
    pub count: usize,
}

/// POST /api/search
///
/// Validates the body, records it as a search query, and returns the matching
/// developers ordered by match score.
pub async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        AppError::Validation(vec![FieldError::malformed_body(rejection.body_text())])
    })?;

    let query = validate_search_query(&body).map_err(AppError::Validation)?;

    let record = state.store.create_search_query(query.clone()).await?;
    debug!(search_id = record.id, prompt = %record.prompt, "search query recorded");

    let results = state.store.search_developers(&query).await?;
    info!(
        search_id = record.id,
        count = results.len(),
        "search completed"
    );

    Ok(Json(SearchResponse {
        search_id: record.id,
        count: results.len(),
        results,
    }))
}
