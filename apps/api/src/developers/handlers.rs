//! Axum route handlers for the Developer lookup API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::Developer;
use crate::state::AppState;

/// GET /api/developers/:id
///
/// The id is taken as a raw string so that a non-numeric value maps to 400
/// instead of axum's default path rejection.
pub async fn handle_get_developer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Developer>, AppError> {
    let id: i32 = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid developer ID".to_string()))?;

    let developer = state
        .store
        .get_developer(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Developer not found".to_string()))?;

    Ok(Json(developer))
}
