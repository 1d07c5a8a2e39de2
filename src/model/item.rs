// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};

/// A single todo entry as served by the remote list endpoint.
///
/// `id` is only a rendering key. Nothing enforces uniqueness and no ordering
/// is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Item {
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The list shown before the first fetch resolves.
pub fn placeholder_items() -> Vec<Item> {
    vec![
        Item::new(1, "1st todo", "Learn Django properly."),
        Item::new(2, "Second item", "Learn Python."),
        Item::new(3, "Learn HTTP", "It's important."),
    ]
}
