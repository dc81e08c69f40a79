//! Server lifecycle.
//!
//! Startup order matters: the store is constructed first, the seeder runs
//! to completion, and only then is the listener bound — so no request is
//! ever handled against a half-seeded collection. On SIGINT the listener
//! drains in-flight requests and the store is closed explicitly.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::AppConfig;
use crate::observability::Logger;
use crate::seed;
use crate::service::QueryService;
use crate::store::{DocumentStore, StoreResult, DEALERSHIPS, REVIEWS};

use super::routes::{api_routes, ApiState};

/// The HTTP server: owns the store handle and the router.
pub struct HttpServer {
    config: AppConfig,
    store: Arc<DocumentStore>,
    router: Router,
}

impl HttpServer {
    /// Construct the store, the query service and the router. Does not
    /// seed or listen; that happens in [`HttpServer::start`].
    pub fn new(config: AppConfig) -> StoreResult<Self> {
        let store = Arc::new(DocumentStore::connect(
            &config.database,
            &[REVIEWS, DEALERSHIPS],
        ));
        let service = QueryService::new(&store)?;
        let state = Arc::new(ApiState { service });
        let router = api_routes(state).layer(build_cors(&config));

        Ok(Self {
            config,
            store,
            router,
        })
    }

    /// Handle to the underlying store.
    pub fn store(&self) -> Arc<DocumentStore> {
        Arc::clone(&self.store)
    }

    /// The router (for in-process testing without a listener).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the seeder against this server's store.
    pub fn seed(&self) {
        seed::seed_store(&self.store, &self.config.seed_dir);
    }

    /// Seed, bind, serve until shutdown, then close the store.
    pub async fn start(self) -> Result<(), std::io::Error> {
        self.seed();

        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info(
            "SERVER_LISTENING",
            &[
                ("addr", &addr.to_string()),
                ("database", self.store.database()),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.store.close();
        Ok(())
    }
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        // No origins configured: permissive, matching the original service.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    Logger::info("SHUTDOWN_REQUESTED", &[]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builds_with_default_config() {
        let server = HttpServer::new(AppConfig::default()).unwrap();
        assert_eq!(server.config.socket_addr(), "0.0.0.0:3030");
    }

    #[test]
    fn test_router_builds_with_configured_origins() {
        let config = AppConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let server = HttpServer::new(config).unwrap();
        let _router = server.router();
    }

    #[test]
    fn test_store_starts_empty_before_seeding() {
        let server = HttpServer::new(AppConfig::default()).unwrap();
        let store = server.store();
        assert_eq!(store.collection(REVIEWS).unwrap().count().unwrap(), 0);
    }
}
