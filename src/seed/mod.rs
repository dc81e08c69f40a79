//! Startup seeding.
//!
//! Loads the two bundled seed files and replaces the contents of the
//! matching collections: delete everything, then insert the file's records
//! in order. Destructive by design — whatever was in a collection before,
//! seeded or inserted since, is gone afterwards.
//!
//! Seeding failures are logged and startup continues; clients never see
//! them. A failure between the delete and the insert leaves that collection
//! empty, an accepted risk of the clear-and-reload contract.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::{Dealership, Review};
use crate::observability::Logger;
use crate::store::{DocumentStore, StoreError, DEALERSHIPS, REVIEWS};

/// Seeding errors. Logged, never surfaced to clients.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Seed file shape: a top-level mapping with a single key holding the
/// ordered record sequence.
#[derive(Deserialize)]
struct ReviewSeedFile {
    reviews: Vec<Review>,
}

#[derive(Deserialize)]
struct DealershipSeedFile {
    dealerships: Vec<Dealership>,
}

/// Replace both collections from `seed_dir`. Each collection is seeded
/// independently; a failure in one is logged and does not stop the other.
pub fn seed_store(store: &DocumentStore, seed_dir: &Path) {
    seed_one(store, REVIEWS, &seed_dir.join("reviews.json"), load_reviews);
    seed_one(
        store,
        DEALERSHIPS,
        &seed_dir.join("dealerships.json"),
        load_dealerships,
    );
}

fn seed_one(
    store: &DocumentStore,
    collection_name: &str,
    path: &Path,
    load: fn(&Path) -> Result<Vec<Value>, SeedError>,
) {
    match reload_collection(store, collection_name, path, load) {
        Ok(count) => Logger::info(
            "SEED_COMPLETE",
            &[
                ("collection", collection_name),
                ("count", &count.to_string()),
            ],
        ),
        Err(e) => Logger::error(
            "SEED_FAILED",
            &[
                ("collection", collection_name),
                ("reason", &e.to_string()),
            ],
        ),
    }
}

fn reload_collection(
    store: &DocumentStore,
    collection_name: &str,
    path: &Path,
    load: fn(&Path) -> Result<Vec<Value>, SeedError>,
) -> Result<usize, SeedError> {
    // Read and decode before touching the collection, so a bad file leaves
    // existing documents in place.
    let docs = load(path)?;
    let collection = store.collection(collection_name)?;
    collection.delete_all()?;
    Ok(collection.insert_many(docs)?)
}

fn load_reviews(path: &Path) -> Result<Vec<Value>, SeedError> {
    let file: ReviewSeedFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    to_documents(file.reviews)
}

fn load_dealerships(path: &Path) -> Result<Vec<Value>, SeedError> {
    let file: DealershipSeedFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    to_documents(file.dealerships)
}

fn to_documents<T: serde::Serialize>(records: Vec<T>) -> Result<Vec<Value>, SeedError> {
    records
        .into_iter()
        .map(|r| serde_json::to_value(r).map_err(SeedError::from))
        .collect()
}
