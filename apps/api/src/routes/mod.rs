pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::developers::handlers as developers;
use crate::extraction::handlers as extraction;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/search", post(search::handle_search))
        .route("/api/developers/:id", get(developers::handle_get_developer))
        .route(
            "/api/extract-filters",
            post(extraction::handle_extract_filters),
        )
        .with_state(state)
}
