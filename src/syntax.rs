use std::fmt;

/// Classification of a syntax tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Whole input; behaves like an S-expression
    Root,
    Number,
    Symbol,
    SExpr,
    QExpr,
    /// Bracket token: `(`, `)`, `{` or `}`
    Punct,
    /// Start/end-of-input anchor
    Marker,
}

impl NodeKind {
    /// Conventional tag text for this kind
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Root => ">",
            NodeKind::Number => "number",
            NodeKind::Symbol => "symbol",
            NodeKind::SExpr => "sexpr",
            NodeKind::QExpr => "qexpr",
            NodeKind::Punct => "char",
            NodeKind::Marker => "regex",
        }
    }

    /// Whether nodes of this kind carry meaning for the reader
    pub fn is_semantic(self) -> bool {
        !matches!(self, NodeKind::Punct | NodeKind::Marker)
    }
}

/// A node of the syntax tree produced by [`crate::parser::parse`].
///
/// Leaves carry their literal text in `contents`; list nodes carry children,
/// including their bracket tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub contents: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(kind: NodeKind, contents: impl Into<String>) -> Self {
        Node {
            kind,
            contents: Some(contents.into()),
            children: Vec::new(),
        }
    }

    pub fn branch(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            contents: None,
            children,
        }
    }

    pub fn punct(c: char) -> Self {
        Node::leaf(NodeKind::Punct, c)
    }

    pub fn marker() -> Self {
        Node::leaf(NodeKind::Marker, "")
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:width$}{}", "", self.kind.tag(), width = depth * 2)?;
        match &self.contents {
            Some(text) if !text.is_empty() => writeln!(f, " '{}'", text)?,
            _ => writeln!(f)?,
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
