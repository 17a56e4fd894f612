// file: src/models/response.rs
// description: raw Google Custom Search API response wrapper
// reference: https://developers.google.com/custom-search/v1/reference/rest/v1/Search

use crate::error::{MapperError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One search response exactly as returned by the API.
///
/// The payload stays untyped so that field extraction can report the exact path that
/// is missing or has the wrong shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResponse(Value);

impl SearchResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Number of result items. The API omits `items` entirely for queries with no
    /// results, so an absent key counts as zero.
    pub fn item_count(&self) -> Result<usize> {
        match self.0.get("items") {
            None => Ok(0),
            Some(Value::Array(items)) => Ok(items.len()),
            Some(_) => Err(MapperError::UnexpectedShape {
                path: "items".to_string(),
                expected: "array",
            }),
        }
    }
}

impl From<Value> for SearchResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
