//! Application state management.
//!
//! Shared state handed to the readiness handler and used to build the domain
//! routers at startup. Clones are cheap (the connection is an Arc'd pool).

use crate::config::Config;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}
