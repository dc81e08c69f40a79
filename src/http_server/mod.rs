//! HTTP server.
//!
//! An axum router mapping six routes onto the query service, plus the
//! server lifecycle: seed, listen, serve, shut down.

pub mod errors;
pub mod routes;
pub mod server;

pub use server::HttpServer;
