use sqlx::SqlitePool;

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod rest;
pub mod scrape;
pub mod validation;

use auth::JwtKeys;
use scrape::Scraper;

/// Handles shared by every request; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt: JwtKeys,
    pub scraper: Scraper,
}

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
