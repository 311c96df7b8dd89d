//! Results view: loading / error / populated states plus the detail modal.

use serde_json::json;
use tracing::{debug, error};

use crate::client::api::ApiClient;
use crate::client::form::CombinedQuery;
use crate::models::Developer;
use crate::search::handlers::SearchResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Loading,
    Failed(String),
    Loaded(SearchResponse),
}

/// Holds the query handed over by the form and what the API returned for it.
#[derive(Debug, Clone)]
pub struct ResultsView {
    query: Option<CombinedQuery>,
    state: ResultsState,
    selected: Option<i32>,
}

impl ResultsView {
    /// `None` means no query was handed over; an empty object is sent then.
    pub fn new(query: Option<CombinedQuery>) -> Self {
        Self {
            query,
            state: ResultsState::Loading,
            selected: None,
        }
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn prompt(&self) -> Option<&str> {
        self.query.as_ref().map(|q| q.data.prompt.as_str())
    }

    /// Issues the search and settles into `Loaded` or `Failed`.
    pub async fn load(&mut self, api: &ApiClient) -> &ResultsState {
        self.state = ResultsState::Loading;
        self.selected = None;

        let outcome = match &self.query {
            Some(query) => api.search(query).await,
            None => api.search(&json!({})).await,
        };

        self.state = match outcome {
            Ok(response) => {
                debug!(count = response.count, "results loaded");
                ResultsState::Loaded(response)
            }
            Err(e) => {
                error!("Error fetching developers: {e}");
                ResultsState::Failed(e.to_string())
            }
        };
        &self.state
    }

    /// The "Try Again" action.
    pub async fn retry(&mut self, api: &ApiClient) -> &ResultsState {
        self.load(api).await
    }

    pub fn developers(&self) -> &[Developer] {
        match &self.state {
            ResultsState::Loaded(response) => &response.results,
            _ => &[],
        }
    }

    /// Opens the detail modal for a card. Unknown ids leave it closed.
    pub fn select(&mut self, id: i32) -> Option<&Developer> {
        self.selected = self.developers().iter().any(|d| d.id == id).then_some(id);
        self.selected_developer()
    }

    pub fn selected_developer(&self) -> Option<&Developer> {
        let id = self.selected?;
        self.developers().iter().find(|d| d.id == id)
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// "Load more" control. There is no pagination, so nothing is fetched.
    pub fn load_more(&mut self) -> usize {
        debug!("load more requested; pagination is not supported");
        0
    }
}
