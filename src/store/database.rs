//! Store handle and lifecycle.

use std::collections::HashMap;
use std::sync::Arc;

use crate::observability::Logger;

use super::collection::Collection;
use super::errors::{StoreError, StoreResult};

/// An in-process document store holding named collections under a logical
/// database name.
///
/// Constructed once at startup and passed to whoever needs it; closed
/// explicitly when the server shuts down.
pub struct DocumentStore {
    database: String,
    collections: HashMap<String, Arc<Collection>>,
}

impl DocumentStore {
    /// Open a store for `database` with the given (empty) collections.
    pub fn connect(database: &str, collection_names: &[&str]) -> Self {
        let collections = collection_names
            .iter()
            .map(|name| (name.to_string(), Arc::new(Collection::new(name))))
            .collect();

        Logger::info("STORE_CONNECTED", &[("database", database)]);
        Self {
            database: database.to_string(),
            collections,
        }
    }

    /// The logical database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Handle to a named collection.
    pub fn collection(&self, name: &str) -> StoreResult<Arc<Collection>> {
        self.collections
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))
    }

    /// Close the store. In-process data does not outlive the process, so
    /// this only marks the end of the handle's lifecycle in the log.
    pub fn close(&self) {
        Logger::info("STORE_CLOSED", &[("database", &self.database)]);
    }
}
