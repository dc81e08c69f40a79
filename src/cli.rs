//! Command-line interface.
//!
//! Parses flags, merges them over the environment-derived config, builds a
//! runtime and runs the server to completion.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::http_server::HttpServer;

/// Dealership review and profile API server
#[derive(Parser, Debug)]
#[command(name = "dealerdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on (overrides DEALERDB_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides DEALERDB_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Logical database name (overrides DEALERDB_DATABASE)
    #[arg(long)]
    pub database: Option<String>,

    /// Directory holding reviews.json and dealerships.json
    /// (overrides DEALERDB_SEED_DIR)
    #[arg(long)]
    pub seed_dir: Option<PathBuf>,
}

impl Cli {
    /// Fold the parsed flags over an environment-derived config.
    pub fn into_config(self) -> AppConfig {
        let mut config = AppConfig::from_env();
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(seed_dir) = self.seed_dir {
            config.seed_dir = seed_dir;
        }
        config
    }
}

/// Parse arguments and run the server until shutdown.
pub fn run() -> Result<(), Box<dyn Error>> {
    let config = Cli::parse().into_config();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let server = HttpServer::new(config)?;
        server.start().await?;
        Ok::<(), Box<dyn Error>>(())
    })
}
