//! Search client: the form, the results view, and the HTTP transport they
//! share. Drives the same flow as the browser front end: form -> AI filter
//! extraction -> search -> cards -> detail.

use thiserror::Error;

use crate::config::optional_env;

pub mod api;
pub mod catalog;
pub mod form;
pub mod render;
pub mod results;

pub use api::ApiClient;
pub use form::{CombinedQuery, SearchData, SearchForm, SkillsInput};
pub use results::{ResultsState, ResultsView};

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    InvalidForm(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Something went wrong while analyzing your search: {0}")]
    FilterExtraction(Box<ClientError>),
}

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub filter_url: String,
}

impl ClientConfig {
    /// The extraction endpoint defaults to the one hosted by the API server.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        let filter_url = format!("{}/api/extract-filters", api_url.trim_end_matches('/'));
        Self {
            api_url,
            filter_url,
        }
    }

    pub fn with_filter_url(mut self, filter_url: impl Into<String>) -> Self {
        self.filter_url = filter_url.into();
        self
    }

    /// Reads `DEVFIND_API_URL` and `DEVFIND_FILTER_URL`.
    pub fn from_env() -> Self {
        Self::resolve(None, None)
    }

    /// Explicit values win over the environment, which wins over defaults.
    pub fn resolve(api_url: Option<String>, filter_url: Option<String>) -> Self {
        dotenvy::dotenv().ok();
        let api_url = api_url
            .or_else(|| optional_env("DEVFIND_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let config = Self::new(api_url);
        match filter_url.or_else(|| optional_env("DEVFIND_FILTER_URL")) {
            Some(url) => config.with_filter_url(url),
            None => config,
        }
    }
}
