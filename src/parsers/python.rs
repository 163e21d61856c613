//! Python front end using tree-sitter
//!
//! Converts the tree-sitter CST into the generic [`SyntaxNode`] tree.
//! Wrapper nodes that only exist in the concrete syntax (`block`,
//! `expression_statement`, `decorated_definition`) are spliced away so a
//! class body exposes its methods and assignments as direct children, the
//! shape the god-class rule counts against.
//!
//! Numeric tokens that do not decode into an integer or float (complex
//! literals, oversized integers) degrade to generic nodes instead of
//! failing the parse.

use crate::ast::{NodeKind, NumberValue, Param, ParamKind, SyntaxNode};
use crate::error::ParseError;
use anyhow::{Context, Result};
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Parse a Python file from disk
pub fn parse_file(path: &Path) -> Result<(String, SyntaxNode)> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let tree = parse_source(&source, path)?;
    Ok((source, tree))
}

/// Parse Python source directly (useful for testing)
pub fn parse_source(source: &str, path: &Path) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser::new();
    let language = tree_sitter_python::LANGUAGE;
    parser
        .set_language(&language.into())
        .map_err(|e| ParseError::new(path, e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::new(path, "parser returned no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        let message = match first_error_line(root) {
            Some(line) => format!("syntax error near line {line}"),
            None => "syntax error".to_string(),
        };
        return Err(ParseError::new(path, message));
    }

    Ok(convert(root, source.as_bytes()))
}

/// Line of the first ERROR or missing node, for the parse error message
fn first_error_line(root: Node) -> Option<usize> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node.start_position().row + 1);
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    None
}

fn convert(node: Node, source: &[u8]) -> SyntaxNode {
    let line = node.start_position().row as u32 + 1;
    let kind = classify(node, source);
    let mut children = Vec::new();
    collect_children(node, source, &mut children);
    SyntaxNode::with_children(kind, line, children)
}

/// Convert `node`'s named children, splicing transparent wrappers so the
/// generic tree matches the abstract statement structure.
fn collect_children(node: Node, source: &[u8], out: &mut Vec<SyntaxNode>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "comment" => {}
            "block" | "expression_statement" | "decorated_definition" => {
                collect_children(child, source, out);
            }
            _ => out.push(convert(child, source)),
        }
    }
}

fn classify(node: Node, source: &[u8]) -> NodeKind {
    match node.kind() {
        "module" => NodeKind::Module,
        "function_definition" => NodeKind::FunctionDef {
            name: field_text(node, "name", source),
            params: extract_params(node.child_by_field_name("parameters"), source),
        },
        "class_definition" => NodeKind::ClassDef {
            name: field_text(node, "name", source),
        },
        "call" => NodeKind::Call {
            receiver: call_receiver(node, source),
        },
        "attribute" => NodeKind::Attribute,
        "integer" => match parse_int(node_text(node, source)) {
            Some(value) => NodeKind::Number(value),
            None => NodeKind::Other,
        },
        "float" => match parse_float(node_text(node, source)) {
            Some(value) => NodeKind::Number(value),
            None => NodeKind::Other,
        },
        "assignment" => NodeKind::Assign,
        "import_statement" | "import_from_statement" | "future_import_statement" => {
            NodeKind::Import
        }
        _ => NodeKind::Other,
    }
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn field_text(node: Node, field: &str, source: &[u8]) -> String {
    node.child_by_field_name(field)
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

/// Identifier receiver of a member-access call (`obj` in `obj.method()`)
fn call_receiver(node: Node, source: &[u8]) -> Option<String> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "attribute" {
        return None;
    }
    let object = callee.child_by_field_name("object")?;
    if object.kind() == "identifier" {
        Some(node_text(object, source).to_string())
    } else {
        None
    }
}

/// Classify the formal parameters of a function definition.
///
/// A bare `*` (or a `*args` splat) switches everything after it to
/// keyword-only; `/` only marks the preceding parameters positional-only and
/// does not change how they are counted.
fn extract_params(params_node: Option<Node>, source: &[u8]) -> Vec<Param> {
    let Some(node) = params_node else {
        return Vec::new();
    };

    let mut params = Vec::new();
    let mut seen_star = false;
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        match child.kind() {
            "identifier" => params.push(Param {
                name: node_text(child, source).to_string(),
                kind: plain_kind(seen_star),
            }),
            "typed_parameter" => {
                if let Some(inner) = child.named_child(0) {
                    match inner.kind() {
                        "identifier" => params.push(Param {
                            name: node_text(inner, source).to_string(),
                            kind: plain_kind(seen_star),
                        }),
                        "list_splat_pattern" => {
                            seen_star = true;
                            params.push(splat_param(inner, source));
                        }
                        "dictionary_splat_pattern" => params.push(splat_param(inner, source)),
                        _ => {}
                    }
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param_name(child, source) {
                    params.push(Param {
                        name,
                        kind: ParamKind::Default,
                    });
                }
            }
            "list_splat_pattern" => {
                seen_star = true;
                params.push(splat_param(child, source));
            }
            "dictionary_splat_pattern" => params.push(splat_param(child, source)),
            // Bare `*` marker: everything after is keyword-only
            "*" | "keyword_separator" => seen_star = true,
            _ => {}
        }
    }

    params
}

fn plain_kind(seen_star: bool) -> ParamKind {
    if seen_star {
        ParamKind::KeywordOnly
    } else {
        ParamKind::Positional
    }
}

fn splat_param(node: Node, source: &[u8]) -> Param {
    let name = first_identifier(node, source).unwrap_or_default();
    Param {
        name,
        kind: ParamKind::Variadic,
    }
}

fn param_name(node: Node, source: &[u8]) -> Option<String> {
    if let Some(name_node) = node.child_by_field_name("name") {
        return Some(node_text(name_node, source).to_string());
    }
    first_identifier(node, source)
}

fn first_identifier(node: Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "identifier" {
            return Some(node_text(child, source).to_string());
        }
    }
    None
}

fn parse_int(text: &str) -> Option<NumberValue> {
    let cleaned = text.replace('_', "");
    let value = if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = cleaned.strip_prefix("0o").or_else(|| cleaned.strip_prefix("0O")) {
        i64::from_str_radix(oct, 8).ok()?
    } else if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).ok()?
    } else {
        cleaned.parse::<i64>().ok()?
    };
    Some(NumberValue::Int(value))
}

fn parse_float(text: &str) -> Option<NumberValue> {
    let cleaned = text.replace('_', "");
    cleaned.parse::<f64>().ok().map(NumberValue::Float)
}
