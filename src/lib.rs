//! Equipment tracker
//!
//! Inventory of video-production equipment: records, tag filters, boxes and
//! shipping, exposed through a REST JSON API over a SQLite store.

use std::sync::Arc;

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
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(services: services::Services) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}
