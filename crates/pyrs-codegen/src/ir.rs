//! Syntax tree consumed by the code generator.
//!
//! A front end builds these nodes from Python source and hands them over,
//! either directly or as JSON (see [`crate::input::json`]). Ownership is
//! strictly tree-shaped: every node owns its children.

use serde::{Deserialize, Serialize};

/// Operators that binary, unary, boolean, comparison and augmented-assignment
/// nodes apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    // Membership
    In,
    NotIn,
    // Arithmetic
    Add,
    Sub,
    Mult,
    MatMult,
    Div,
    FloorDiv,
    Mod,
    Pow,
    // Bitwise
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    // Logical
    And,
    Or,
    // Unary
    Not,
    Invert,
    UAdd,
    USub,
}

impl OpKind {
    /// Every operator kind, in declaration order.
    pub const ALL: [OpKind; 29] = [
        OpKind::Eq,
        OpKind::NotEq,
        OpKind::Lt,
        OpKind::LtE,
        OpKind::Gt,
        OpKind::GtE,
        OpKind::Is,
        OpKind::IsNot,
        OpKind::In,
        OpKind::NotIn,
        OpKind::Add,
        OpKind::Sub,
        OpKind::Mult,
        OpKind::MatMult,
        OpKind::Div,
        OpKind::FloorDiv,
        OpKind::Mod,
        OpKind::Pow,
        OpKind::LShift,
        OpKind::RShift,
        OpKind::BitOr,
        OpKind::BitXor,
        OpKind::BitAnd,
        OpKind::And,
        OpKind::Or,
        OpKind::Not,
        OpKind::Invert,
        OpKind::UAdd,
        OpKind::USub,
    ];

    /// Name of the operator as the Python `ast` module spells it.
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Eq => "Eq",
            OpKind::NotEq => "NotEq",
            OpKind::Lt => "Lt",
            OpKind::LtE => "LtE",
            OpKind::Gt => "Gt",
            OpKind::GtE => "GtE",
            OpKind::Is => "Is",
            OpKind::IsNot => "IsNot",
            OpKind::In => "In",
            OpKind::NotIn => "NotIn",
            OpKind::Add => "Add",
            OpKind::Sub => "Sub",
            OpKind::Mult => "Mult",
            OpKind::MatMult => "MatMult",
            OpKind::Div => "Div",
            OpKind::FloorDiv => "FloorDiv",
            OpKind::Mod => "Mod",
            OpKind::Pow => "Pow",
            OpKind::LShift => "LShift",
            OpKind::RShift => "RShift",
            OpKind::BitOr => "BitOr",
            OpKind::BitXor => "BitXor",
            OpKind::BitAnd => "BitAnd",
            OpKind::And => "And",
            OpKind::Or => "Or",
            OpKind::Not => "Not",
            OpKind::Invert => "Invert",
            OpKind::UAdd => "UAdd",
            OpKind::USub => "USub",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A name. `annotation` is set when the name sits in a type annotation.
    Identifier {
        name: String,
        #[serde(default)]
        annotation: bool,
    },

    Literal(Literal),

    BinaryOp {
        op: OpKind,
        left: Box<Node>,
        right: Box<Node>,
    },

    UnaryOp {
        op: OpKind,
        operand: Box<Node>,
    },

    /// Short-circuit `and` / `or` over any number of operands.
    BooleanOp {
        op: OpKind,
        values: Vec<Node>,
    },

    /// `left ops[0] comparators[0] ops[1] comparators[1] ...`
    Comparison {
        left: Box<Node>,
        ops: Vec<OpKind>,
        comparators: Vec<Node>,
    },

    /// An f-string. Segments are string literals or [`Node::FormattedSegment`]s.
    InterpolatedString {
        segments: Vec<Node>,
    },

    FormattedSegment {
        value: Box<Node>,
        #[serde(default)]
        spec: Option<Box<Node>>,
    },

    /// The text after `:` inside an f-string placeholder.
    FormatSpecifier {
        parts: Vec<Node>,
    },

    Conditional {
        test: Box<Node>,
        body: Vec<Node>,
        #[serde(default)]
        orelse: Vec<Node>,
    },

    /// Pre-test `while` loop.
    Loop {
        test: Box<Node>,
        body: Vec<Node>,
    },

    Return(Option<Box<Node>>),

    Break,

    Continue,

    AugmentedAssign {
        target: Box<Node>,
        op: OpKind,
        value: Box<Node>,
    },

    /// `pass`
    NoOp,

    /// A construct the front end parsed but this layer has no rule for.
    Unsupported {
        kind: String,
    },
}

impl Node {
    /// Every node kind as it is spelled in serialized trees.
    pub const KINDS: [&'static str; 17] = [
        "Identifier",
        "Literal",
        "BinaryOp",
        "UnaryOp",
        "BooleanOp",
        "Comparison",
        "InterpolatedString",
        "FormattedSegment",
        "FormatSpecifier",
        "Conditional",
        "Loop",
        "Return",
        "Break",
        "Continue",
        "AugmentedAssign",
        "NoOp",
        "Unsupported",
    ];

    /// Name of the node kind, used in diagnostics. The front end's own kind
    /// name for an [`Node::Unsupported`] node is in its `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Identifier { .. } => "Identifier",
            Node::Literal(_) => "Literal",
            Node::BinaryOp { .. } => "BinaryOp",
            Node::UnaryOp { .. } => "UnaryOp",
            Node::BooleanOp { .. } => "BooleanOp",
            Node::Comparison { .. } => "Comparison",
            Node::InterpolatedString { .. } => "InterpolatedString",
            Node::FormattedSegment { .. } => "FormattedSegment",
            Node::FormatSpecifier { .. } => "FormatSpecifier",
            Node::Conditional { .. } => "Conditional",
            Node::Loop { .. } => "Loop",
            Node::Return(_) => "Return",
            Node::Break => "Break",
            Node::Continue => "Continue",
            Node::AugmentedAssign { .. } => "AugmentedAssign",
            Node::NoOp => "NoOp",
            Node::Unsupported { .. } => "Unsupported",
        }
    }

    // Helper constructors

    pub fn ident(name: impl Into<String>) -> Self {
        Node::Identifier {
            name: name.into(),
            annotation: false,
        }
    }

    /// An identifier in annotation position.
    pub fn annotation(name: impl Into<String>) -> Self {
        Node::Identifier {
            name: name.into(),
            annotation: true,
        }
    }

    pub fn int(n: i64) -> Self {
        Node::Literal(Literal::Int(n))
    }

    pub fn float(n: f64) -> Self {
        Node::Literal(Literal::Float(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Node::Literal(Literal::Str(s.into()))
    }

    pub fn bool(b: bool) -> Self {
        Node::Literal(Literal::Bool(b))
    }

    pub fn binary(left: Node, op: OpKind, right: Node) -> Self {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: OpKind, operand: Node) -> Self {
        Node::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn boolean(op: OpKind, values: Vec<Node>) -> Self {
        Node::BooleanOp { op, values }
    }

    /// A single-pair comparison.
    pub fn compare(left: Node, op: OpKind, right: Node) -> Self {
        Node::Comparison {
            left: Box::new(left),
            ops: vec![op],
            comparators: vec![right],
        }
    }

    pub fn fstring(segments: Vec<Node>) -> Self {
        Node::InterpolatedString { segments }
    }

    /// `{value}` or `{value:spec}` inside an f-string.
    pub fn formatted(value: Node, spec: Option<&str>) -> Self {
        Node::FormattedSegment {
            value: Box::new(value),
            spec: spec.map(|s| Box::new(Node::format_spec(s))),
        }
    }

    pub fn format_spec(text: impl Into<String>) -> Self {
        Node::FormatSpecifier {
            parts: vec![Node::string(text)],
        }
    }

    pub fn if_stmt(test: Node, body: Vec<Node>, orelse: Vec<Node>) -> Self {
        Node::Conditional {
            test: Box::new(test),
            body,
            orelse,
        }
    }

    pub fn while_loop(test: Node, body: Vec<Node>) -> Self {
        Node::Loop {
            test: Box::new(test),
            body,
        }
    }

    pub fn return_stmt(value: Option<Node>) -> Self {
        Node::Return(value.map(Box::new))
    }

    pub fn aug_assign(target: Node, op: OpKind, value: Node) -> Self {
        Node::AugmentedAssign {
            target: Box::new(target),
            op,
            value: Box::new(value),
        }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Node::Unsupported { kind: kind.into() }
    }
}
