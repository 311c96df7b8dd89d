use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::models::{
    Developer, NewDeveloper, NewUser, SearchQuery, SearchQueryInput, User,
};
use crate::search::filter::filter_and_rank;
use crate::storage::seed::seed_developers;
use crate::storage::{Storage, StorageError};

/// Rows keyed by id plus the next id to hand out. Both live under the same
/// lock so id assignment and insert are one step.
///
/// Ids only ever increase, so `BTreeMap` iteration order is insertion order.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self, table: &'static str) -> Result<i32, StorageError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(StorageError::IdOverflow(table))?;
        Ok(id)
    }
}

/// Process-memory store. Each table has its own mutex; no lock is held
/// across an `.await`.
pub struct MemStorage {
    users: Mutex<Table<User>>,
    developers: Mutex<Table<Developer>>,
    search_queries: Mutex<Table<SearchQuery>>,
}

impl MemStorage {
    /// An empty store with no seed data.
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Table::new()),
            developers: Mutex::new(Table::new()),
            search_queries: Mutex::new(Table::new()),
        }
    }

    /// A store preloaded with the seed developers.
    pub fn new() -> Self {
        Self::with_developers(seed_developers())
    }

    /// A store preloaded with the given developers, keeping their ids.
    pub fn with_developers(developers: Vec<Developer>) -> Self {
        let mut table = Table::new();
        for dev in developers {
            table.next_id = table.next_id.max(dev.id.saturating_add(1));
            table.rows.insert(dev.id, dev);
        }
        debug!("MemStorage seeded with {} developers", table.rows.len());
        Self {
            developers: Mutex::new(table),
            ..Self::empty()
        }
    }

    /// Number of search queries recorded so far.
    pub fn search_query_count(&self) -> Result<usize, StorageError> {
        Ok(lock(&self.search_queries, "search_queries")?.rows.len())
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<'a, T>(
    table: &'a Mutex<Table<T>>,
    name: &'static str,
) -> Result<MutexGuard<'a, Table<T>>, StorageError> {
    table.lock().map_err(|_| StorageError::Poisoned(name))
}

/// Current time in the `2024-01-31T12:00:00.000Z` form.
fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        Ok(lock(&self.users, "users")?.rows.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let users = lock(&self.users, "users")?;
        Ok(users.rows.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut users = lock(&self.users, "users")?;
        if users.rows.values().any(|u| u.username == user.username) {
            return Err(StorageError::DuplicateUsername(user.username));
        }
        let id = users.allocate_id("users")?;
        let user = user.into_user(id);
        users.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn get_developer(&self, id: i32) -> Result<Option<Developer>, StorageError> {
        Ok(lock(&self.developers, "developers")?.rows.get(&id).cloned())
    }

    async fn search_developers(
        &self,
        query: &SearchQueryInput,
    ) -> Result<Vec<Developer>, StorageError> {
        let developers = lock(&self.developers, "developers")?;
        Ok(filter_and_rank(developers.rows.values(), query))
    }

    async fn create_developer(&self, developer: NewDeveloper) -> Result<Developer, StorageError> {
        let mut developers = lock(&self.developers, "developers")?;
        let id = developers.allocate_id("developers")?;
        let developer = developer.into_developer(id);
        developers.rows.insert(id, developer.clone());
        debug!(id, "developer created");
        Ok(developer)
    }

    async fn create_search_query(
        &self,
        query: SearchQueryInput,
    ) -> Result<SearchQuery, StorageError> {
        let mut queries = lock(&self.search_queries, "search_queries")?;
        let id = queries.allocate_id("search_queries")?;
        let record = query.into_record(id, iso_timestamp());
        queries.rows.insert(id, record.clone());
        Ok(record)
    }
}
