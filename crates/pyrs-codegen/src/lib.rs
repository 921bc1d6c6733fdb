//! Code generation from a Python syntax tree to Rust surface syntax.
//!
//! `pyrs-codegen` is the back end of the pyrs translator: it takes nodes
//! produced by an external front end and emits equivalent Rust text. It maps
//! syntax, not semantics; no type inference or name resolution happens here.
//!
//! # Architecture
//!
//! ```text
//! Front end              Tree               Output
//! ─────────────    ─────────────────    ──────────────────
//! JSON        ─┐                    ┌─> expression text
//! in-process  ─┴─> Node (ir.rs) ────┼─> statement lines
//!                                   └─> unit (unit.rs)
//! ```
//!
//! # Example
//!
//! ```
//! use pyrs_codegen::{Node, OpKind, RustWriter};
//!
//! let node = Node::binary(Node::ident("a"), OpKind::Pow, Node::int(2));
//! assert_eq!(RustWriter.translate(&node).unwrap(), "a.pow(2)");
//! ```
//!
//! # Known limitations
//!
//! - Chained comparisons (`a < b < c`) translate only their first pair.
//! - Format specifiers in f-strings are copied verbatim into `{:#...}`; a
//!   specifier Rust does not understand yields invalid output.

pub mod config;
pub mod input;
pub mod ir;
pub mod output;
pub mod tables;
pub mod traits;
pub mod unit;

// Re-exports: tree types
pub use ir::{Literal, Node, OpKind};

// Re-exports: traits and errors
pub use traits::{ReadError, Reader, TranslateError, Writer};

// Re-exports: built-in reader and writer
pub use input::{JsonReader, read_json};
pub use output::{RUST_WRITER, RustWriter};

// Re-exports: unit driver
pub use config::{CodegenConfig, ConfigError, ErrorPolicy};
pub use unit::{Skipped, Translation, translate_unit};
