//! Reading Lists server
//!
//! A REST JSON API for per-user reading lists of books. Lists are private or
//! public; only their owner may change them or the books they hold.

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub mod access;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, pool: Pool<Postgres>) -> Self {
        let repository = repository::Repository::new(pool);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
