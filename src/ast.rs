//! Generic syntax tree consumed by the detectors
//!
//! The parser converts language-specific syntax into this small owned tree:
//! tagged nodes carrying a 1-based source line and their children. Only the
//! node types the detectors measure get their own variant; everything else
//! becomes [`NodeKind::Other`] so subtree line spans stay accurate.
//!
//! Nodes hold no parent references. Where a detector needs parent context
//! (the magic-number import exclusion), it is passed down during traversal.

/// How a formal parameter is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain positional parameter (`x`, `x: int`)
    Positional,
    /// Parameter with a default value (`x=1`)
    Default,
    /// Keyword-only parameter (after a bare `*`)
    KeywordOnly,
    /// Variadic parameter (`*args`, `**kwargs`)
    Variadic,
}

/// One formal parameter of a function definition
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

/// A numeric literal value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

impl NumberValue {
    pub fn as_f64(self) -> f64 {
        match self {
            NumberValue::Int(v) => v as f64,
            NumberValue::Float(v) => v,
        }
    }
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberValue::Int(v) => write!(f, "{v}"),
            NumberValue::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            NumberValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Node variants the detectors care about
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// File root
    Module,
    /// Function or method definition
    FunctionDef { name: String, params: Vec<Param> },
    /// Class definition
    ClassDef { name: String },
    /// Call expression. `receiver` is the identifier a member-access callee
    /// is invoked on (`obj` in `obj.method()`); `None` for plain calls and
    /// for chained or computed receivers.
    Call { receiver: Option<String> },
    /// Member access expression
    Attribute,
    /// Numeric literal
    Number(NumberValue),
    /// Plain assignment statement
    Assign,
    /// Import statement
    Import,
    /// Any other construct, kept for line-span accuracy
    Other,
}

/// One node of the generic tree
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// 1-based source line of the construct's defining line
    pub line: u32,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, line: u32) -> Self {
        Self {
            kind,
            line,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, line: u32, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            line,
            children,
        }
    }

    /// Preorder traversal of this node and its whole subtree
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Preorder traversal invoking `f` with each node's parent kind.
    /// The root is visited with `None`.
    pub fn walk_with_parent<F>(&self, f: &mut F)
    where
        F: FnMut(Option<&NodeKind>, &SyntaxNode),
    {
        f(None, self);
        self.walk_children_with_parent(f);
    }

    fn walk_children_with_parent<F>(&self, f: &mut F)
    where
        F: FnMut(Option<&NodeKind>, &SyntaxNode),
    {
        for child in &self.children {
            f(Some(&self.kind), child);
            child.walk_children_with_parent(f);
        }
    }

    /// Maximum line number of any node within this subtree (including self)
    pub fn max_line(&self) -> u32 {
        self.walk().map(|n| n.line).max().unwrap_or(self.line)
    }

    /// Line span of a definition: distance from its defining line to the
    /// deepest line its subtree reaches. A definition with no body spans 0.
    pub fn line_span(&self) -> u32 {
        if self.children.is_empty() {
            return 0;
        }
        self.max_line().saturating_sub(self.line) + 1
    }

    /// Direct children matching `predicate` (not descendants)
    pub fn count_direct_children<P>(&self, predicate: P) -> usize
    where
        P: Fn(&NodeKind) -> bool,
    {
        self.children.iter().filter(|c| predicate(&c.kind)).count()
    }
}

/// Preorder iterator over a subtree
pub struct Walk<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: NodeKind, line: u32) -> SyntaxNode {
        SyntaxNode::new(kind, line)
    }

    fn func(name: &str, line: u32, children: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::with_children(
            NodeKind::FunctionDef {
                name: name.to_string(),
                params: vec![],
            },
            line,
            children,
        )
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = SyntaxNode::with_children(
            NodeKind::Module,
            1,
            vec![
                func("a", 1, vec![leaf(NodeKind::Other, 2)]),
                leaf(NodeKind::Import, 4),
            ],
        );
        let lines: Vec<u32> = tree.walk().map(|n| n.line).collect();
        assert_eq!(lines, vec![1, 1, 2, 4]);
    }

    #[test]
    fn test_line_span_counts_deepest_descendant() {
        let f = func(
            "f",
            10,
            vec![
                leaf(NodeKind::Other, 11),
                SyntaxNode::with_children(NodeKind::Other, 12, vec![leaf(NodeKind::Other, 30)]),
            ],
        );
        assert_eq!(f.line_span(), 21);
    }

    #[test]
    fn test_line_span_empty_body_is_zero() {
        assert_eq!(func("f", 5, vec![]).line_span(), 0);
    }

    #[test]
    fn test_walk_with_parent_passes_parent_kind() {
        let tree = SyntaxNode::with_children(
            NodeKind::Import,
            1,
            vec![leaf(NodeKind::Number(NumberValue::Int(7)), 1)],
        );
        let mut seen = Vec::new();
        tree.walk_with_parent(&mut |parent, node| {
            seen.push((parent.cloned(), node.kind.clone()));
        });
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, None);
        assert_eq!(seen[1].0, Some(NodeKind::Import));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(NumberValue::Int(42).to_string(), "42");
        assert_eq!(NumberValue::Float(3.25).to_string(), "3.25");
        assert_eq!(NumberValue::Float(5.0).to_string(), "5.0");
    }

    #[test]
    fn test_count_direct_children_ignores_descendants() {
        let class = SyntaxNode::with_children(
            NodeKind::ClassDef {
                name: "C".to_string(),
            },
            1,
            vec![
                func("m", 2, vec![func("nested", 3, vec![])]),
                leaf(NodeKind::Assign, 5),
            ],
        );
        let methods =
            class.count_direct_children(|k| matches!(k, NodeKind::FunctionDef { .. }));
        assert_eq!(methods, 1);
    }
}
