//! HTTP transport for the search client.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::client::{ClientConfig, ClientError};
use crate::extraction::handlers::FilterRequest;
use crate::models::Developer;
use crate::search::handlers::SearchResponse;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Typed client for the developer-discovery API and the filter-extraction
/// service. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    api_url: String,
    filter_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            filter_url: config.filter_url.clone(),
        })
    }

    /// Sends the prompt and selected skills to the extraction service. The
    /// reply is returned as opaque JSON; only "valid JSON" is assumed.
    pub async fn extract_filters(
        &self,
        prompt: &str,
        tools: &[String],
    ) -> Result<Value, ClientError> {
        let body = FilterRequest {
            prompt: prompt.to_string(),
            tools: Some(tools.to_vec()),
        };
        debug!(url = %self.filter_url, "requesting AI filters");
        let response = self.http.post(&self.filter_url).json(&body).send().await?;
        decode(response).await
    }

    /// POST /api/search with any serializable query body.
    pub async fn search<Q: Serialize + ?Sized>(
        &self,
        query: &Q,
    ) -> Result<SearchResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/search", self.api_url))
            .json(query)
            .send()
            .await?;
        decode(response).await
    }

    /// GET /api/developers/:id
    pub async fn get_developer(&self, id: i32) -> Result<Developer, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/developers/{id}", self.api_url))
            .send()
            .await?;
        decode(response).await
    }

    /// GET /api/health
    pub async fn health(&self) -> Result<Value, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/health", self.api_url))
            .send()
            .await?;
        decode(response).await
    }
}

/// Decodes a success body, or turns an error status into `ClientError::Api`
/// using the server's `{message}` when present.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|e| e.message)
        .unwrap_or(text);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
