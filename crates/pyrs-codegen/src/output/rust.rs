//! Rust writer for Python syntax trees.
//!
//! Every node translates independently of its siblings: the text for a node
//! is a pure function of its own subtree and the tables in [`crate::tables`].
//! Binary expressions are parenthesized unconditionally, so the emitted text
//! groups the same way the tree does without a precedence-aware printer.
//!
//! The pairing of operator and node kind is not validated: any operator with a
//! table entry is accepted wherever an operator appears, so a `BooleanOp`
//! carrying `Add` joins its operands with `+`.

use crate::config::CodegenConfig;
use crate::ir::{Literal, Node, OpKind};
use crate::tables::{
    NO_OP, RESERVED_SUFFIX, is_boolean_constant, is_reserved_word, operator_token, primitive_type,
};
use crate::traits::{TranslateError, Writer};
use crate::unit::translate_unit;
use tracing::{trace, warn};

/// Static instance of the Rust writer for callers that want a `&dyn Writer`.
pub static RUST_WRITER: RustWriter = RustWriter;

/// Translates Python syntax tree nodes into Rust surface syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustWriter;

impl Writer for RustWriter {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn write(&self, unit: &[Node]) -> Result<String, TranslateError> {
        Ok(translate_unit(unit, &CodegenConfig::default())?.text())
    }
}

impl RustWriter {
    /// Translate a node to a single piece of text. Statements spanning several
    /// lines are joined with `\n`.
    pub fn translate(&self, node: &Node) -> Result<String, TranslateError> {
        Ok(self.translate_lines(node)?.join("\n"))
    }

    /// Translate a node to its output lines. Expressions and simple statements
    /// yield one line; conditionals and loops yield their header, body and
    /// closing brace as separate lines.
    pub fn translate_lines(&self, node: &Node) -> Result<Vec<String>, TranslateError> {
        if let Node::Unsupported { kind } = node {
            trace!(kind = node.kind(), source_kind = %kind, "translating node");
        } else {
            trace!(kind = node.kind(), "translating node");
        }
        match node {
            Node::Conditional { test, body, orelse } => self.write_if(test, body, orelse),
            Node::Loop { test, body } => self.write_while(test, body),
            _ => Ok(vec![self.write_node(node)?]),
        }
    }

    fn write_node(&self, node: &Node) -> Result<String, TranslateError> {
        match node {
            Node::Identifier { name, annotation } => Ok(write_ident(name, *annotation)),

            Node::Literal(lit) => Ok(write_literal(lit)),

            Node::BinaryOp { op, left, right } => self.write_binary(*op, left, right),

            Node::UnaryOp { op, operand } => {
                let token = token(*op)?;
                Ok(format!("{token}{}", self.write_node(operand)?))
            }

            Node::BooleanOp { op, values } => {
                if values.is_empty() {
                    return Err(TranslateError::EmptyBooleanOp { op: *op });
                }
                let token = token(*op)?;
                let values = values
                    .iter()
                    .map(|v| self.write_node(v))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(values.join(token))
            }

            Node::Comparison {
                left,
                ops,
                comparators,
            } => self.write_compare(left, ops, comparators),

            Node::InterpolatedString { segments } => self.write_fstring(segments),

            Node::FormattedSegment { value, .. } => self.write_node(value),

            Node::FormatSpecifier { parts } => write_placeholder(parts),

            Node::Conditional { .. } | Node::Loop { .. } => self.translate(node),

            Node::Return(value) => match value {
                Some(value) => Ok(format!("return {};", self.write_node(value)?)),
                None => Ok("return;".to_string()),
            },

            Node::Break => Ok("break;".to_string()),

            Node::Continue => Ok("continue;".to_string()),

            Node::AugmentedAssign { target, op, value } => {
                let target = self.write_node(target)?;
                let token = token(*op)?;
                let value = self.write_node(value)?;
                Ok(format!("{target} {token}= {value};"))
            }

            Node::NoOp => Ok(NO_OP.to_string()),

            Node::Unsupported { kind } => Err(TranslateError::UnsupportedNodeKind {
                kind: kind.clone(),
            }),
        }
    }

    fn write_binary(&self, op: OpKind, left: &Node, right: &Node) -> Result<String, TranslateError> {
        // Rust has no exponentiation operator.
        if op == OpKind::Pow {
            return Ok(format!(
                "{}.pow({})",
                self.write_node(left)?,
                self.write_node(right)?
            ));
        }

        let left = self.write_node(left)?;
        let token = token(op)?;
        let right = self.write_node(right)?;

        // Multiplication and division bind tighter; no spaces around them.
        if matches!(op, OpKind::Mult | OpKind::Div) {
            Ok(format!("({left}{token}{right})"))
        } else {
            Ok(format!("({left} {token} {right})"))
        }
    }

    fn write_compare(
        &self,
        left: &Node,
        ops: &[OpKind],
        comparators: &[Node],
    ) -> Result<String, TranslateError> {
        let (Some(op), Some(right)) = (ops.first(), comparators.first()) else {
            return Err(TranslateError::MalformedComparison);
        };
        if ops.len() > 1 || comparators.len() > 1 {
            warn!(
                pairs = ops.len().max(comparators.len()),
                "chained comparison: only the first pair is translated"
            );
        }

        let left = self.write_node(left)?;
        let token = token(*op)?;
        let right = self.write_node(right)?;

        // Containment is a method on the container, not an operator.
        if *op == OpKind::In {
            return Ok(format!("{right}.any({left})"));
        }
        Ok(format!("{left} {token} {right}"))
    }

    fn write_fstring(&self, segments: &[Node]) -> Result<String, TranslateError> {
        let mut template = String::new();
        let mut args = Vec::new();
        for segment in segments {
            match segment {
                Node::Literal(Literal::Str(text)) => template.push_str(&escape_template(text)),
                Node::FormattedSegment { value, spec } => {
                    match spec.as_deref() {
                        None => template.push_str("{:?}"),
                        Some(Node::FormatSpecifier { parts }) => {
                            template.push_str(&write_placeholder(parts)?)
                        }
                        Some(other) => {
                            return Err(TranslateError::MalformedInterpolation {
                                reason: format!("format spec is a {} node", other.kind()),
                            });
                        }
                    }
                    args.push(self.write_node(value)?);
                }
                other => {
                    return Err(TranslateError::MalformedInterpolation {
                        reason: format!("unexpected {} segment", other.kind()),
                    });
                }
            }
        }
        Ok(format!("format!(\"{template}\",{})", args.join(",")))
    }

    fn write_if(
        &self,
        test: &Node,
        body: &[Node],
        orelse: &[Node],
    ) -> Result<Vec<String>, TranslateError> {
        let mut lines = vec![format!("if {} {{", self.write_node(test)?)];
        self.write_body(body, &mut lines)?;
        if !orelse.is_empty() {
            lines.push("} else {".to_string());
            self.write_body(orelse, &mut lines)?;
        }
        lines.push("}".to_string());
        Ok(lines)
    }

    fn write_while(&self, test: &Node, body: &[Node]) -> Result<Vec<String>, TranslateError> {
        let mut lines = vec![format!("while {} {{", self.write_node(test)?)];
        self.write_body(body, &mut lines)?;
        lines.push("}".to_string());
        Ok(lines)
    }

    fn write_body(&self, body: &[Node], lines: &mut Vec<String>) -> Result<(), TranslateError> {
        for stmt in body {
            lines.extend(self.translate_lines(stmt)?);
        }
        Ok(())
    }
}

fn token(op: OpKind) -> Result<&'static str, TranslateError> {
    operator_token(op).ok_or(TranslateError::UnmappedOperator { op })
}

fn write_ident(name: &str, annotation: bool) -> String {
    if is_boolean_constant(name) {
        return name.to_lowercase();
    }
    if is_reserved_word(name) {
        return format!("{name}{RESERVED_SUFFIX}");
    }
    if annotation {
        if let Some(ty) = primitive_type(name) {
            return ty.to_string();
        }
    }
    name.to_string()
}

fn write_literal(lit: &Literal) -> String {
    match lit {
        Literal::Int(n) => n.to_string(),
        Literal::Float(n) => write_float(*n),
        Literal::Str(s) => format!("\"{}\"", escape_string(s)),
        Literal::Bool(b) => b.to_string(),
    }
}

fn write_float(n: f64) -> String {
    if n.is_nan() {
        "f64::NAN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "f64::INFINITY".to_string()
        } else {
            "f64::NEG_INFINITY".to_string()
        }
    } else {
        // Debug keeps the `.0` on whole numbers, so the text stays a float literal.
        format!("{n:?}")
    }
}

/// The specifier text is copied through as-is.
fn write_placeholder(parts: &[Node]) -> Result<String, TranslateError> {
    match parts {
        [Node::Literal(Literal::Str(text))] => Ok(format!("{{:#{text}}}")),
        [] => Err(TranslateError::MalformedInterpolation {
            reason: "empty format spec".to_string(),
        }),
        [_] => Err(TranslateError::MalformedInterpolation {
            reason: "format spec is not literal text".to_string(),
        }),
        _ => Err(TranslateError::MalformedInterpolation {
            reason: format!("format spec has {} parts, expected 1", parts.len()),
        }),
    }
}

/// Literal text inside a `format!` template: a string literal in which braces
/// would otherwise start a placeholder.
fn escape_template(s: &str) -> String {
    escape_string(s).replace('{', "{{").replace('}', "}}")
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::OPERATOR_TABLE;

    fn emit(node: &Node) -> String {
        RustWriter.translate(node).expect("translation failed")
    }

    fn emit_err(node: &Node) -> TranslateError {
        RustWriter.translate(node).expect_err("translation should fail")
    }

    #[test]
    fn test_boolean_constants() {
        assert_eq!(emit(&Node::ident("True")), "true");
        assert_eq!(emit(&Node::ident("False")), "false");
        assert_eq!(emit(&Node::bool(true)), "true");
    }

    #[test]
    fn test_reserved_word_gets_suffix_once() {
        assert_eq!(emit(&Node::ident("type")), "type_");
        assert_eq!(emit(&Node::ident("match")), "match_");
        assert_eq!(emit(&Node::ident("type_")), "type_");
        // Reserved-word handling wins over annotation mapping.
        assert_eq!(emit(&Node::annotation("type")), "type_");
    }

    #[test]
    fn test_plain_identifier_unchanged() {
        assert_eq!(emit(&Node::ident("count")), "count");
        assert_eq!(emit(&Node::ident("int")), "int");
    }

    #[test]
    fn test_annotation_maps_primitive_types() {
        assert_eq!(emit(&Node::annotation("int")), "i32");
        assert_eq!(emit(&Node::annotation("float")), "f32");
        assert_eq!(emit(&Node::annotation("str")), "&str");
        assert_eq!(emit(&Node::annotation("bytes")), "&[u8]");
        assert_eq!(emit(&Node::annotation("Widget")), "Widget");
    }

    #[test]
    fn test_numeric_literals() {
        assert_eq!(emit(&Node::int(42)), "42");
        assert_eq!(emit(&Node::int(-7)), "-7");
        assert_eq!(emit(&Node::float(1.0)), "1.0");
        assert_eq!(emit(&Node::float(0.25)), "0.25");
        assert_eq!(emit(&Node::float(f64::INFINITY)), "f64::INFINITY");
    }

    #[test]
    fn test_numeric_literal_round_trip() {
        for n in [0_i64, 1, 42, -13, i64::MAX] {
            assert_eq!(emit(&Node::int(n)).parse::<i64>().unwrap(), n);
        }
        for n in [0.5_f64, 3.0, 1e-7, 6.02e23, -2.75] {
            assert_eq!(emit(&Node::float(n)).parse::<f64>().unwrap(), n);
        }
    }

    #[test]
    fn test_string_literal_escapes_quotes() {
        assert_eq!(emit(&Node::string("hi")), "\"hi\"");
        assert_eq!(emit(&Node::string("say \"hi\"")), "\"say \\\"hi\\\"\"");
        assert_eq!(emit(&Node::string("a\\b\n")), "\"a\\\\b\\n\"");
    }

    #[test]
    fn test_binary_spacing() {
        let a = || Node::ident("a");
        let b = || Node::ident("b");
        assert_eq!(emit(&Node::binary(a(), OpKind::Add, b())), "(a + b)");
        assert_eq!(emit(&Node::binary(a(), OpKind::Sub, b())), "(a - b)");
        assert_eq!(emit(&Node::binary(a(), OpKind::Mult, b())), "(a*b)");
        assert_eq!(emit(&Node::binary(a(), OpKind::Div, b())), "(a/b)");
        assert_eq!(emit(&Node::binary(a(), OpKind::FloorDiv, b())), "(a / b)");
        assert_eq!(emit(&Node::binary(a(), OpKind::Mod, b())), "(a % b)");
    }

    #[test]
    fn test_nested_binary_is_fully_parenthesized() {
        let node = Node::binary(
            Node::int(1),
            OpKind::Add,
            Node::binary(Node::int(2), OpKind::Mult, Node::int(3)),
        );
        assert_eq!(emit(&node), "(1 + (2*3))");
    }

    #[test]
    fn test_every_mapped_binary_operator() {
        for (op, tok) in OPERATOR_TABLE {
            if matches!(op, OpKind::Not | OpKind::USub | OpKind::And | OpKind::Or | OpKind::In) {
                continue;
            }
            let out = emit(&Node::binary(Node::ident("x"), *op, Node::ident("y")));
            let expected = if matches!(op, OpKind::Mult | OpKind::Div) {
                format!("(x{tok}y)")
            } else {
                format!("(x {tok} y)")
            };
            assert_eq!(out, expected, "operator {op}");
        }
    }

    #[test]
    fn test_pow_is_a_method_call() {
        let node = Node::binary(Node::ident("a"), OpKind::Pow, Node::ident("b"));
        assert_eq!(emit(&node), "a.pow(b)");

        let node = Node::binary(
            Node::binary(Node::ident("a"), OpKind::Add, Node::int(1)),
            OpKind::Pow,
            Node::ident("type"),
        );
        assert_eq!(emit(&node), "(a + 1).pow(type_)");
    }

    #[test]
    fn test_unary() {
        assert_eq!(emit(&Node::unary(OpKind::Not, Node::ident("done"))), "!done");
        assert_eq!(emit(&Node::unary(OpKind::USub, Node::int(5))), "-5");
        assert_eq!(
            emit_err(&Node::unary(OpKind::Invert, Node::ident("x"))),
            TranslateError::UnmappedOperator { op: OpKind::Invert }
        );
    }

    #[test]
    fn test_boolean_op() {
        let node = Node::boolean(
            OpKind::And,
            vec![Node::ident("a"), Node::ident("b"), Node::ident("c")],
        );
        assert_eq!(emit(&node), "a&&b&&c");

        let node = Node::boolean(
            OpKind::Or,
            vec![
                Node::compare(Node::ident("x"), OpKind::Gt, Node::int(0)),
                Node::ident("y"),
            ],
        );
        assert_eq!(emit(&node), "x > 0||y");
    }

    #[test]
    fn test_empty_boolean_op_fails() {
        assert_eq!(
            emit_err(&Node::boolean(OpKind::Or, vec![])),
            TranslateError::EmptyBooleanOp { op: OpKind::Or }
        );
    }

    #[test]
    fn test_operator_pairing_is_not_validated() {
        let node = Node::boolean(OpKind::Add, vec![Node::ident("a"), Node::ident("b")]);
        assert_eq!(emit(&node), "a+b");
        let node = Node::unary(OpKind::Sub, Node::ident("a"));
        assert_eq!(emit(&node), "-a");
    }

    #[test]
    fn test_comparison() {
        let node = Node::compare(Node::ident("a"), OpKind::LtE, Node::int(1));
        assert_eq!(emit(&node), "a <= 1");
        let node = Node::compare(Node::ident("a"), OpKind::Is, Node::ident("b"));
        assert_eq!(emit(&node), "a == b");
        let node = Node::compare(Node::ident("a"), OpKind::IsNot, Node::ident("b"));
        assert_eq!(emit(&node), "a != b");
    }

    #[test]
    fn test_chained_comparison_keeps_first_pair() {
        let node = Node::Comparison {
            left: Box::new(Node::int(0)),
            ops: vec![OpKind::Lt, OpKind::Lt],
            comparators: vec![Node::ident("x"), Node::int(10)],
        };
        assert_eq!(emit(&node), "0 < x");
    }

    #[test]
    fn test_empty_comparison_fails() {
        let node = Node::Comparison {
            left: Box::new(Node::ident("x")),
            ops: vec![],
            comparators: vec![],
        };
        assert_eq!(emit_err(&node), TranslateError::MalformedComparison);
    }

    #[test]
    fn test_membership() {
        let node = Node::compare(Node::ident("x"), OpKind::In, Node::ident("y"));
        assert_eq!(emit(&node), "y.any(x)");

        let node = Node::compare(Node::ident("x"), OpKind::NotIn, Node::ident("y"));
        assert_eq!(
            emit_err(&node),
            TranslateError::UnmappedOperator { op: OpKind::NotIn }
        );
    }

    #[test]
    fn test_fstring_with_spec() {
        let node = Node::fstring(vec![Node::formatted(Node::ident("x"), Some("02"))]);
        assert_eq!(emit(&node), "format!(\"{:#02}\",x)");
    }

    #[test]
    fn test_fstring_order() {
        let node = Node::fstring(vec![
            Node::string("a="),
            Node::formatted(Node::ident("a"), None),
            Node::string(", b="),
            Node::formatted(Node::ident("b"), Some(".2")),
            Node::string("!"),
        ]);
        assert_eq!(emit(&node), "format!(\"a={:?}, b={:#.2}!\",a,b)");
    }

    #[test]
    fn test_fstring_text_is_escaped() {
        let node = Node::fstring(vec![
            Node::string("say \"hi\" {x}"),
            Node::formatted(Node::ident("a"), None),
        ]);
        let out = emit(&node);
        assert_eq!(out, r#"format!("say \"hi\" {{x}}{:?}",a)"#);
        // One placeholder per expression segment.
        let template = out.replace("{{", "").replace("}}", "");
        assert_eq!(template.matches("{:").count(), 1);
    }

    #[test]
    fn test_fstring_without_expressions() {
        let node = Node::fstring(vec![Node::string("plain")]);
        assert_eq!(emit(&node), "format!(\"plain\",)");
    }

    #[test]
    fn test_fstring_arguments_are_translated() {
        let node = Node::fstring(vec![Node::formatted(
            Node::binary(Node::ident("type"), OpKind::Add, Node::int(1)),
            None,
        )]);
        assert_eq!(emit(&node), "format!(\"{:?}\",(type_ + 1))");
    }

    #[test]
    fn test_fstring_rejects_nested_spec() {
        let node = Node::fstring(vec![Node::FormattedSegment {
            value: Box::new(Node::ident("x")),
            spec: Some(Box::new(Node::FormatSpecifier {
                parts: vec![Node::string(">"), Node::formatted(Node::ident("w"), None)],
            })),
        }]);
        assert!(matches!(
            emit_err(&node),
            TranslateError::MalformedInterpolation { .. }
        ));
    }

    #[test]
    fn test_fstring_rejects_foreign_segment() {
        let node = Node::fstring(vec![Node::int(3)]);
        assert!(matches!(
            emit_err(&node),
            TranslateError::MalformedInterpolation { .. }
        ));
    }

    #[test]
    fn test_standalone_format_nodes() {
        assert_eq!(emit(&Node::format_spec(">8")), "{:#>8}");
        assert_eq!(emit(&Node::formatted(Node::ident("x"), Some("02"))), "x");
    }

    #[test]
    fn test_simple_statements() {
        assert_eq!(emit(&Node::return_stmt(Some(Node::ident("a")))), "return a;");
        assert_eq!(emit(&Node::return_stmt(None)), "return;");
        assert_eq!(emit(&Node::Break), "break;");
        assert_eq!(emit(&Node::Continue), "continue;");
        assert_eq!(emit(&Node::NoOp), "/*pass*/");
    }

    #[test]
    fn test_aug_assign() {
        let node = Node::aug_assign(Node::ident("x"), OpKind::Add, Node::int(1));
        assert_eq!(emit(&node), "x += 1;");
        let node = Node::aug_assign(Node::ident("mask"), OpKind::LShift, Node::ident("n"));
        assert_eq!(emit(&node), "mask <<= n;");
        let node = Node::aug_assign(Node::ident("x"), OpKind::Pow, Node::int(2));
        assert_eq!(
            emit_err(&node),
            TranslateError::UnmappedOperator { op: OpKind::Pow }
        );
    }

    #[test]
    fn test_if_else() {
        let node = Node::if_stmt(
            Node::compare(Node::ident("a"), OpKind::Eq, Node::int(1)),
            vec![Node::return_stmt(Some(Node::ident("a")))],
            vec![Node::return_stmt(Some(Node::int(0)))],
        );
        assert_eq!(
            emit(&node),
            "if a == 1 {\nreturn a;\n} else {\nreturn 0;\n}"
        );
    }

    #[test]
    fn test_if_without_else() {
        let node = Node::if_stmt(Node::ident("ok"), vec![Node::Break], vec![]);
        assert_eq!(
            RustWriter.translate_lines(&node).unwrap(),
            vec!["if ok {", "break;", "}"]
        );
    }

    #[test]
    fn test_while_with_nested_if() {
        let node = Node::while_loop(
            Node::ident("True"),
            vec![
                Node::aug_assign(Node::ident("i"), OpKind::Add, Node::int(1)),
                Node::if_stmt(
                    Node::compare(Node::ident("i"), OpKind::GtE, Node::int(10)),
                    vec![Node::Break],
                    vec![Node::Continue],
                ),
            ],
        );
        assert_eq!(
            RustWriter.translate_lines(&node).unwrap(),
            vec![
                "while true {",
                "i += 1;",
                "if i >= 10 {",
                "break;",
                "} else {",
                "continue;",
                "}",
                "}",
            ]
        );
    }

    #[test]
    fn test_unsupported_node_is_named() {
        assert_eq!(
            emit_err(&Node::unsupported("Lambda")),
            TranslateError::UnsupportedNodeKind {
                kind: "Lambda".to_string()
            }
        );
    }

    #[test]
    fn test_failure_inside_body_aborts_statement() {
        let node = Node::if_stmt(
            Node::ident("c"),
            vec![
                Node::Break,
                Node::aug_assign(Node::ident("m"), OpKind::MatMult, Node::ident("w")),
            ],
            vec![],
        );
        assert_eq!(
            emit_err(&node),
            TranslateError::UnmappedOperator {
                op: OpKind::MatMult
            }
        );
    }

    #[test]
    fn test_writer_metadata() {
        assert_eq!(RUST_WRITER.language(), "rust");
        assert_eq!(RUST_WRITER.extension(), "rs");
    }
}
