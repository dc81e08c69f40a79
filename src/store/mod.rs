//! Embedded document store.
//!
//! A small in-process store: named collections of JSON documents, shared
//! behind locks. The process is the only client; "connecting" constructs the
//! collections a database is declared with, and the handle is passed
//! explicitly to whoever needs it — there is no process-global connection.

pub mod collection;
mod database;
pub mod errors;

pub use collection::Collection;
pub use database::DocumentStore;
pub use errors::{StoreError, StoreResult};

/// Collection holding customer reviews.
pub const REVIEWS: &str = "reviews";

/// Collection holding dealership profiles.
pub const DEALERSHIPS: &str = "dealerships";
