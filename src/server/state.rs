//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - JWT service holding the signing keys and token lifetimes
//! - bcrypt cost used when hashing new passwords

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::auth::jwt::JwtService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the JWT keys
/// sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates access and refresh tokens.
    pub jwt: JwtService,

    /// bcrypt work factor for newly hashed passwords.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration providing token and hashing settings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            jwt: JwtService::new(config),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
