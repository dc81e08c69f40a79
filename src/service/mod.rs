//! Query operations over the two collections.
//!
//! Six operations, each a direct mapping from an endpoint to a store query.
//! Client-facing error messages stay generic (§ errors); the store error
//! rides along as the source for the log.

pub mod errors;

use std::sync::Arc;

use serde_json::Value;

use crate::model::ReviewSubmission;
use crate::store::{Collection, DocumentStore, StoreError, StoreResult, DEALERSHIPS, REVIEWS};

pub use errors::{ServiceError, ServiceResult};

/// The query service: read operations over both collections plus the one
/// write operation (insert a review with an assigned id).
pub struct QueryService {
    reviews: Arc<Collection>,
    dealerships: Arc<Collection>,
}

impl QueryService {
    /// Build a service over the store's two collections.
    pub fn new(store: &DocumentStore) -> StoreResult<Self> {
        Ok(Self {
            reviews: store.collection(REVIEWS)?,
            dealerships: store.collection(DEALERSHIPS)?,
        })
    }

    /// Every review, in insertion order.
    pub fn fetch_all_reviews(&self) -> ServiceResult<Vec<Value>> {
        self.reviews
            .find_all()
            .map_err(ServiceError::store("Error fetching documents"))
    }

    /// Reviews whose `dealership` matches the route parameter. The parameter
    /// is used as-is; an empty result is not an error.
    pub fn fetch_reviews_by_dealer(&self, dealer_id: &str) -> ServiceResult<Vec<Value>> {
        self.reviews
            .find(|doc| dealer_matches(doc, dealer_id))
            .map_err(ServiceError::store("Error fetching documents"))
    }

    /// Every dealership, in insertion order.
    pub fn fetch_all_dealers(&self) -> ServiceResult<Vec<Value>> {
        self.dealerships
            .find_all()
            .map_err(ServiceError::store("Failed to fetch dealers"))
    }

    /// Dealerships whose `state` equals the given short code exactly.
    pub fn fetch_dealers_by_state(&self, state: &str) -> ServiceResult<Vec<Value>> {
        self.dealerships
            .find(|doc| doc.get("state").and_then(Value::as_str) == Some(state))
            .map_err(ServiceError::store("Error fetching documents"))
    }

    /// The single dealership whose `id` equals the route parameter parsed as
    /// an integer. Unparsable input matches nothing and yields
    /// [`ServiceError::DealerNotFound`], same as an absent id.
    pub fn fetch_dealer_by_id(&self, raw_id: &str) -> ServiceResult<Value> {
        let id = raw_id.parse::<i64>().ok();
        let found = self
            .dealerships
            .find_one(|doc| id.is_some() && doc.get("id").and_then(Value::as_i64) == id)
            .map_err(ServiceError::store("Failed to fetch dealer by ID"))?;

        found.ok_or(ServiceError::DealerNotFound)
    }

    /// Persist a submitted review under the next free id: one more than the
    /// current maximum, or 1 on an empty collection. The id scan and the
    /// insert are a single atomic store operation, so concurrent inserts
    /// never produce duplicate ids. Returns the document as persisted.
    pub fn insert_review(&self, submission: ReviewSubmission) -> ServiceResult<Value> {
        // The id passed here is a placeholder; the store assigns the real one.
        let doc = serde_json::to_value(submission.into_review(0))
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))
            .map_err(ServiceError::store("Error inserting review"))?;

        self.reviews
            .insert_with_sequence(doc, "id")
            .map_err(ServiceError::store("Error inserting review"))
    }
}

/// Route-parameter equality against the `dealership` attribute, tolerant of
/// the attribute being stored as a number or a string.
fn dealer_matches(doc: &Value, dealer_id: &str) -> bool {
    match doc.get("dealership") {
        Some(Value::Number(n)) => dealer_id.parse::<i64>().ok() == n.as_i64(),
        Some(Value::String(s)) => s == dealer_id,
        _ => false,
    }
}
