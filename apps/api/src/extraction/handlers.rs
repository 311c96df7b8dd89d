//! Axum route handler for the filter-extraction API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_filters, ExtractedFilters};
use crate::state::AppState;

/// Body sent by the search form: the raw prompt plus the skills picked in the
/// tag input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    pub prompt: String,
    #[serde(default)]
    pub tools: Option<Vec<String>>,
}

/// POST /api/extract-filters
pub async fn handle_extract_filters(
    State(state): State<AppState>,
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<ExtractedFilters>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if request.prompt.trim().is_empty() {
        return Err(AppError::BadRequest("prompt cannot be empty".to_string()));
    }

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("AI filter extraction is not configured".to_string())
    })?;

    let tools = request.tools.unwrap_or_default();
    let filters = extract_filters(&request.prompt, &tools, llm).await?;
    info!(
        categories = filters.category.len(),
        technical = filters.technical.len(),
        "filters extracted"
    );

    Ok(Json(filters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{http::StatusCode, routing::post, Router};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::routes::build_router;
    use crate::storage::MemStorage;

    /// Serves a fixed Messages-API reply and returns its URL.
    async fn stub_llm(reply_text: &'static str, status: StatusCode) -> String {
        let app = Router::new().route(
            "/v1/messages",
            post(move || async move {
                (
                    status,
                    Json(json!({
                        "content": [{"type": "text", "text": reply_text}],
                        "usage": {"input_tokens": 120, "output_tokens": 30}
                    })),
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/v1/messages")
    }

    fn server_with_llm(url: String) -> TestServer {
        let llm = LlmClient::with_api_url("test-key".to_string(), url).unwrap();
        let state = AppState::new(Arc::new(MemStorage::new()), Some(llm), Config::default());
        TestServer::new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_and_normalizes() {
        let url = stub_llm(
            "```json\n{\"category\": [\"Climate Tech\"], \"technical\": [\"MongoDB\", \"next.js\"], \"location\": \"Vancouver\"}\n```",
            StatusCode::OK,
        )
        .await;
        let server = server_with_llm(url);

        let response = server
            .post("/api/extract-filters")
            .json(&json!({"prompt": "climate dashboard in Vancouver", "tools": ["Next.js"]}))
            .await;
        response.assert_status_ok();
        let body: ExtractedFilters = response.json();
        assert_eq!(body.category, vec!["climate tech"]);
        assert_eq!(body.technical, vec!["next.js", "mongodb"]);
        assert_eq!(body.location.as_deref(), Some("vancouver"));
    }

    #[tokio::test]
    async fn test_llm_failure_is_502_without_detail() {
        let url = stub_llm("overloaded", StatusCode::INTERNAL_SERVER_ERROR).await;
        let server = server_with_llm(url);

        let response = server
            .post("/api/extract-filters")
            .json(&json!({"prompt": "anything"}))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["message"], "AI filter extraction failed");
    }

    #[tokio::test]
    async fn test_unconfigured_is_503() {
        let server = TestServer::new(build_router(AppState::in_memory())).unwrap();
        server
            .post("/api/extract-filters")
            .json(&json!({"prompt": "anything", "tools": []}))
            .expect_failure()
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_empty_prompt_is_400() {
        let server = TestServer::new(build_router(AppState::in_memory())).unwrap();
        server
            .post("/api/extract-filters")
            .json(&json!({"prompt": "  "}))
            .expect_failure()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
