//! JSON reader for front-end trees.
//!
//! The front end serializes nodes in serde's externally tagged form, e.g.
//! `{"Identifier": {"name": "x"}}` or `"Break"`. A document is either a single
//! node or an array of top-level nodes.
//!
//! A top-level node whose kind this crate does not know is read as
//! [`Node::Unsupported`], so the unit driver can report (or skip) it by name.
//! Unknown kinds nested inside a known node fail the read; serde's message
//! names the offending kind.

use crate::ir::Node;
use crate::traits::{ReadError, Reader};
use serde::Deserialize;
use serde_json::Value;

/// Static instance of the JSON reader.
pub static JSON_READER: JsonReader = JsonReader;

pub struct JsonReader;

impl Reader for JsonReader {
    fn language(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn read(&self, source: &str) -> Result<Vec<Node>, ReadError> {
        read_json(source)
    }
}

/// Parse a JSON document into top-level nodes.
pub fn read_json(source: &str) -> Result<Vec<Node>, ReadError> {
    let document: Value =
        serde_json::from_str(source).map_err(|err| ReadError::Parse(err.to_string()))?;
    match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                read_node(item).map_err(|err| ReadError::Parse(format!("node {index}: {err}")))
            })
            .collect(),
        item => Ok(vec![read_node(item).map_err(|err| ReadError::Parse(err.to_string()))?]),
    }
}

fn read_node(value: Value) -> Result<Node, serde_json::Error> {
    if let Some(kind) = unknown_kind(&value) {
        return Ok(Node::unsupported(kind));
    }
    Node::deserialize(value)
}

/// The tag of `value` if it is shaped like a node but names no known kind.
fn unknown_kind(value: &Value) -> Option<String> {
    let tag = match value {
        Value::String(tag) => tag,
        Value::Object(map) if map.len() == 1 => map.keys().next()?,
        _ => return None,
    };
    (!Node::KINDS.contains(&tag.as_str())).then(|| tag.clone())
}
