//! Forum Backend
//!
//! A small REST backend serving forum topics, subjects and comments from SQLite.

mod api;
mod config;
mod db;
mod errors;
mod lifecycle;
mod models;

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Forum Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    if let Some(seed_path) = &config.seed_path {
        tracing::info!("Seed file: {:?}", seed_path);
    }

    if let Err(e) = lifecycle::run(config, lifecycle::shutdown_signal()).await {
        tracing::error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let api_routes = Router::new()
        // Topics
        .route("/get_topics", get(api::list_topics))
        .route("/get_topics_one/{id}", get(api::get_topics_by_id))
        // Subjects
        .route("/get_subjects", get(api::list_subjects))
        // Comments
        .route("/get_topic_info/{id}", get(api::get_topic_comments))
        .route("/send_comment", post(api::send_comment))
        .route("/send_comment/", post(api::send_comment));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
