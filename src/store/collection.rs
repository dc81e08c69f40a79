//! A named set of JSON documents.

use std::sync::RwLock;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};

/// A named collection of JSON documents, held in insertion order.
///
/// The store enforces no schema: whatever object is inserted is what reads
/// return. All access goes through one `RwLock`, which is also what makes
/// [`Collection::insert_with_sequence`] safe under concurrent writers.
pub struct Collection {
    name: String,
    docs: RwLock<Vec<Value>>,
}

impl Collection {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            docs: RwLock::new(Vec::new()),
        }
    }

    /// The collection's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of documents currently stored.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read_docs()?.len())
    }

    /// Every document, in insertion order.
    pub fn find_all(&self) -> StoreResult<Vec<Value>> {
        Ok(self.read_docs()?.clone())
    }

    /// Documents matching the predicate, in insertion order.
    pub fn find(&self, pred: impl Fn(&Value) -> bool) -> StoreResult<Vec<Value>> {
        Ok(self.read_docs()?.iter().filter(|d| pred(d)).cloned().collect())
    }

    /// The first document matching the predicate, if any.
    pub fn find_one(&self, pred: impl Fn(&Value) -> bool) -> StoreResult<Option<Value>> {
        Ok(self.read_docs()?.iter().find(|d| pred(d)).cloned())
    }

    /// Delete every document. Returns how many were removed.
    pub fn delete_all(&self) -> StoreResult<usize> {
        let mut docs = self.write_docs()?;
        let removed = docs.len();
        docs.clear();
        Ok(removed)
    }

    /// Append the given documents in order. Every document must be a JSON
    /// object; on a non-object nothing is inserted.
    pub fn insert_many(&self, batch: Vec<Value>) -> StoreResult<usize> {
        if batch.iter().any(|d| !d.is_object()) {
            return Err(StoreError::NotAnObject);
        }
        let mut docs = self.write_docs()?;
        let inserted = batch.len();
        docs.extend(batch);
        Ok(inserted)
    }

    /// Insert `doc` with `field` set to one more than the current maximum
    /// value of `field` across the collection, or 1 when no document carries
    /// it. The scan and the insert happen under a single write lock, so two
    /// concurrent callers can never observe the same maximum.
    ///
    /// Returns the document as persisted.
    pub fn insert_with_sequence(&self, doc: Value, field: &str) -> StoreResult<Value> {
        let Value::Object(mut map) = doc else {
            return Err(StoreError::NotAnObject);
        };

        let mut docs = self.write_docs()?;
        let next = docs
            .iter()
            .filter_map(|d| d.get(field).and_then(Value::as_u64))
            .max()
            .map_or(1, |max| max + 1);

        map.insert(field.to_string(), Value::from(next));
        let persisted = Value::Object(map);
        docs.push(persisted.clone());
        Ok(persisted)
    }

    fn read_docs(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<Value>>> {
        self.docs
            .read()
            .map_err(|_| StoreError::Poisoned(self.name.clone()))
    }

    fn write_docs(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<Value>>> {
        self.docs
            .write()
            .map_err(|_| StoreError::Poisoned(self.name.clone()))
    }
}
