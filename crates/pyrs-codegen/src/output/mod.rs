//! Output writers - emit syntax trees as target-language source.

pub mod rust;

pub use rust::{RUST_WRITER, RustWriter};
