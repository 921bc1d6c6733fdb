//! Input readers - accept trees produced by an external front end.

pub mod json;

pub use json::{JSON_READER, JsonReader, read_json};
