//! Traits for front-end readers and target-language writers.

use crate::ir::{Node, OpKind};

/// Error that can occur when reading a front end's tree.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Error that can occur when translating a node.
///
/// All variants are deterministic: re-translating the same tree fails the same
/// way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslateError {
    #[error("no target token for operator {op}")]
    UnmappedOperator { op: OpKind },

    #[error("no translation rule for node kind {kind}")]
    UnsupportedNodeKind { kind: String },

    #[error("malformed interpolated string: {reason}")]
    MalformedInterpolation { reason: String },

    #[error("comparison has no operator/comparator pair")]
    MalformedComparison,

    #[error("boolean operation {op} has no operands")]
    EmptyBooleanOp { op: OpKind },
}

/// A reader turns a front end's serialized output into top-level nodes.
pub trait Reader: Send + Sync {
    /// Format identifier (e.g., "json").
    fn language(&self) -> &'static str;

    /// File extensions this reader handles.
    fn extensions(&self) -> &'static [&'static str];

    fn read(&self, source: &str) -> Result<Vec<Node>, ReadError>;
}

/// A writer emits a unit of top-level nodes as target-language source.
pub trait Writer: Send + Sync {
    /// Language identifier (e.g., "rust").
    fn language(&self) -> &'static str;

    /// File extension for output (e.g., "rs").
    fn extension(&self) -> &'static str;

    /// Emit the unit, failing on the first construct that cannot be translated.
    fn write(&self, unit: &[Node]) -> Result<String, TranslateError>;
}
