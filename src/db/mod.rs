//! Database module for SQLite persistence.
//!
//! Each collection lives in its own table; documents are never joined.

mod repository;
mod seed;

pub use repository::*;
pub use seed::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open a connection pool for `url` and create missing tables.
pub async fn init_database(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // Ensure the parent directory exists
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!("Failed to create database directory {:?}: {}", parent, e);
            }
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Create collection tables.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT,
            text TEXT,
            author TEXT,
            date_day INTEGER,
            date_month INTEGER,
            date_year INTEGER,
            subject TEXT,
            topic_id INTEGER
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id TEXT PRIMARY KEY NOT NULL,
            subject_id INTEGER,
            name TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topic_comments (
            id TEXT PRIMARY KEY NOT NULL,
            author TEXT,
            text TEXT,
            date_day INTEGER,
            date_month INTEGER,
            date_year INTEGER,
            topic_id INTEGER
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
