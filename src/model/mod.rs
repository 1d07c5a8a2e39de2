// File: ./src/model/mod.rs
// Aggregates the item model and its wire decoding
pub mod decode;
pub mod item;

pub use decode::{DecodeError, decode_items};
pub use item::{Item, placeholder_items};
