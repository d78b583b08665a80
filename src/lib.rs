//! Bookshelf Library Catalog
//!
//! A small web application for managing a library catalog of books and
//! authors, rendering server-side HTML over a SQLite store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Embedded database migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<repository::Repository>,
}
