//! Dealership records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dealership profile.
///
/// Created only at seed time; there is no creation endpoint. `state` is the
/// short code the filter endpoint matches against. Everything else (city,
/// address, zip, full name, ...) is descriptive and carried verbatim in the
/// extras map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealership {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
