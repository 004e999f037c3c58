//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use scribe_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub upload: UploadConfig,
}

/// Where uploaded images land and how large they may be.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            upload: UploadConfig {
                dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("uploads")),
                max_bytes: env::var("UPLOAD_MAX_BYTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5 * 1024 * 1024),
            },
        }
    }
}
