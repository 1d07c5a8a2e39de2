// File: ./src/model/decode.rs
// Boundary between the raw response body and the item list
use crate::model::item::Item;
use std::collections::HashSet;
use thiserror::Error;

/// The body was not a JSON array of `{id, title, body}` objects.
#[derive(Debug, Error)]
#[error("response body is not a list of items: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

impl DecodeError {
    /// Line and column in the body where decoding stopped.
    pub fn position(&self) -> (usize, usize) {
        (self.source.line(), self.source.column())
    }
}

/// Decodes a response body into an ordered item list.
///
/// Unknown fields are ignored. Missing fields, wrong types, or a non-array
/// top level fail. Duplicate ids are accepted but logged, since the list is
/// keyed by id when drawn.
pub fn decode_items(body: &[u8]) -> Result<Vec<Item>, DecodeError> {
    let items: Vec<Item> = serde_json::from_slice(body)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id) {
            tracing::warn!(id = item.id, "Duplicate item id in response");
        }
    }

    Ok(items)
}
