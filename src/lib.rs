//! Bookstore catalog server
//!
//! A small REST JSON API for browsing an in-memory book catalog
//! and registering users.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{CatalogStore, Repository};
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build state over a loaded catalog and an empty user registry
    pub fn new(config: AppConfig, catalog: CatalogStore) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(Repository::new(catalog))),
        }
    }
}
