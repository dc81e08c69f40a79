//! dealerdb - dealership review and profile API over an embedded document store

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod seed;
pub mod service;
pub mod store;
