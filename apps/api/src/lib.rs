//! Developer-discovery backend and search client.
//!
//! The `api` binary serves the REST endpoints from `routes`; the `devfind`
//! binary drives the `client` flow against a running server.

pub mod client;
pub mod config;
pub mod developers;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod search;
pub mod state;
pub mod storage;
