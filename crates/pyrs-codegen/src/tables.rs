//! Static lookup tables shared by every translation.
//!
//! All tables are plain `static` data: initialized at compile time, never
//! mutated, safe to read from any thread.

use crate::ir::OpKind;

/// Python operator → Rust token.
///
/// Operators missing here (`NotIn`, `MatMult`, `Invert`, `UAdd`, `Pow`) have no
/// direct token; translating one is an error. `Pow` is only ever emitted through
/// the `.pow(..)` method form.
pub static OPERATOR_TABLE: &[(OpKind, &str)] = &[
    (OpKind::Eq, "=="),
    (OpKind::Is, "=="),
    (OpKind::NotEq, "!="),
    (OpKind::Mult, "*"),
    (OpKind::Add, "+"),
    (OpKind::Sub, "-"),
    (OpKind::Div, "/"),
    (OpKind::FloorDiv, "/"),
    (OpKind::Mod, "%"),
    (OpKind::Lt, "<"),
    (OpKind::Gt, ">"),
    (OpKind::GtE, ">="),
    (OpKind::LtE, "<="),
    (OpKind::LShift, "<<"),
    (OpKind::RShift, ">>"),
    (OpKind::BitXor, "^"),
    (OpKind::BitOr, "|"),
    (OpKind::BitAnd, "&"),
    (OpKind::Not, "!"),
    (OpKind::IsNot, "!="),
    (OpKind::USub, "-"),
    (OpKind::And, "&&"),
    (OpKind::Or, "||"),
    (OpKind::In, "in"),
];

/// Python primitive type name → Rust type, applied in annotation position.
pub static PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("int", "i32"),
    ("float", "f32"),
    ("bytes", "&[u8]"),
    ("str", "&str"),
];

/// Names that are legal in Python but are keywords in Rust.
pub static RESERVED_WORDS: &[&str] = &[
    "struct", "type", "match", "impl", "const", "enum", "extern", "fn", "loop", "move", "mut",
    "pub", "ref", "trait", "where", "use", "unsafe",
];

/// Names Python treats as boolean constants.
pub static BOOLEAN_CONSTANTS: &[&str] = &["True", "False"];

/// Appended to identifiers that collide with a reserved word.
pub const RESERVED_SUFFIX: &str = "_";

/// Emitted for `pass`.
pub const NO_OP: &str = "/*pass*/";

/// Look up the Rust token for an operator.
pub fn operator_token(op: OpKind) -> Option<&'static str> {
    OPERATOR_TABLE
        .iter()
        .find(|(kind, _)| *kind == op)
        .map(|(_, token)| *token)
}

/// Look up the Rust spelling of a Python primitive type.
pub fn primitive_type(name: &str) -> Option<&'static str> {
    PRIMITIVE_TYPES
        .iter()
        .find(|(py, _)| *py == name)
        .map(|(_, rs)| *rs)
}

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

pub fn is_boolean_constant(name: &str) -> bool {
    BOOLEAN_CONSTANTS.contains(&name)
}
