//! Storage: the lookup/filter/append contract behind every route.
//!
//! Handlers only see `Arc<dyn Storage>` (carried in `AppState`), so a durable
//! backend can replace `MemStorage` without touching the API layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Developer, NewDeveloper, NewUser, SearchQuery, SearchQueryInput, User,
};

pub mod memory;
pub mod seed;

pub use memory::MemStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage lock poisoned: {0}")]
    Poisoned(&'static str),

    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("id space exhausted for {0}")]
    IdOverflow(&'static str),
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// Exact key lookup.
    async fn get_developer(&self, id: i32) -> Result<Option<Developer>, StorageError>;

    /// Developers passing the query's skills and location filters, ordered by
    /// descending match score. See `search::filter::filter_and_rank`.
    async fn search_developers(
        &self,
        query: &SearchQueryInput,
    ) -> Result<Vec<Developer>, StorageError>;

    async fn create_developer(&self, developer: NewDeveloper) -> Result<Developer, StorageError>;

    /// Append-only; assigns the id and creation timestamp.
    async fn create_search_query(
        &self,
        query: SearchQueryInput,
    ) -> Result<SearchQuery, StorageError>;
}
