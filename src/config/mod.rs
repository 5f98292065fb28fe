//! Configuration module for the forum backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/forum.sqlite";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the document store
    pub database_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Optional JSON file used to populate empty collections at startup
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = parse_bind_addr(env::var("FORUM_BIND_ADDR").ok().as_deref());

        let log_level = env::var("FORUM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_path = env::var("FORUM_SEED_PATH").ok().map(PathBuf::from);

        Self {
            database_url,
            bind_addr,
            log_level,
            seed_path,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn parse_bind_addr(raw: Option<&str>) -> SocketAddr {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|e| {
            tracing::warn!(
                "Invalid FORUM_BIND_ADDR {:?} ({}), using default {}",
                value,
                e,
                DEFAULT_BIND_ADDR
            );
            default_bind_addr()
        }),
        None => default_bind_addr(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("URL");
        env::remove_var("FORUM_BIND_ADDR");
        env::remove_var("FORUM_LOG_LEVEL");
        env::remove_var("FORUM_SEED_PATH");

        let config = Config::from_env();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, "info");
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_bind_addr_override() {
        let addr = parse_bind_addr(Some("0.0.0.0:9000"));
        assert_eq!(addr.to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn test_invalid_bind_addr_falls_back() {
        let addr = parse_bind_addr(Some("not an address"));
        assert_eq!(addr.to_string(), DEFAULT_BIND_ADDR);
    }
}
