//! Record schemas for the two document collections.
//!
//! The store itself enforces no schema; these types describe the expected
//! shape of a document. Every attribute except `id` is optional, and unknown
//! attributes ride along in a flattened extras map, so documents with
//! missing or additional fields round-trip unchanged.

pub mod dealership;
pub mod review;

pub use dealership::Dealership;
pub use review::{Review, ReviewSubmission};
