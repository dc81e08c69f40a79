//! Review records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A customer review of a dealership.
///
/// `id` is assigned by the query service, never by the client. `dealership`
/// references a [`super::Dealership`] id; nothing enforces that the referenced
/// dealer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealership: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_make: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_year: Option<i64>,

    /// Attributes outside the known set, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A review as submitted by a client, before an id has been assigned.
///
/// Deserialized straight from the request body. A client-supplied `id` lands
/// in `extra` and is discarded when the id is assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealership: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_make: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_year: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReviewSubmission {
    /// Promote the submission to a stored review with the given id.
    pub fn into_review(mut self, id: u64) -> Review {
        self.extra.remove("id");
        Review {
            id,
            name: self.name,
            dealership: self.dealership,
            review: self.review,
            purchase: self.purchase,
            purchase_date: self.purchase_date,
            car_make: self.car_make,
            car_model: self.car_model,
            car_year: self.car_year,
            extra: self.extra,
        }
    }
}
