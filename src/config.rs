//! Process configuration
//!
//! Defaults mirror the fixed values the service has always used (port 3030,
//! database `dealershipsDB`, seed files under `./data`). Each value can be
//! overridden through `DEALERDB_*` environment variables so deployments do
//! not need a rebuild; CLI flags override both.

use std::env;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 3030)
    pub port: u16,

    /// Logical database name (default: "dealershipsDB")
    pub database: String,

    /// Directory holding `reviews.json` and `dealerships.json`
    pub seed_dir: PathBuf,

    /// CORS allowed origins; empty means permissive
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3030
}

fn default_database() -> String {
    "dealershipsDB".to_string()
}

fn default_seed_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: default_database(),
            seed_dir: default_seed_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("DEALERDB_HOST") {
            config.host = host;
        }
        if let Some(port) = env::var("DEALERDB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.port = port;
        }
        if let Ok(database) = env::var("DEALERDB_DATABASE") {
            config.database = database;
        }
        if let Ok(seed_dir) = env::var("DEALERDB_SEED_DIR") {
            config.seed_dir = PathBuf::from(seed_dir);
        }
        if let Ok(origins) = env::var("DEALERDB_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
