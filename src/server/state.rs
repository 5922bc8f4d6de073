//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the signing keys and token settings
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies access tokens.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
