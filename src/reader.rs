use crate::LispError;
use crate::ast::Value;
use crate::syntax::{Node, NodeKind};

/// Convert a syntax tree into a value tree without evaluating anything.
pub fn read(node: &Node) -> Value {
    match node.kind {
        NodeKind::Number => read_number(node.contents.as_deref().unwrap_or_default()),
        NodeKind::Symbol => {
            let name = node.contents.clone().unwrap_or_default();
            tracing::trace!(symbol = %name, "read symbol");
            Value::Symbol(name)
        }
        NodeKind::Root | NodeKind::SExpr => Value::SExpr(read_children(node)),
        NodeKind::QExpr => Value::QExpr(read_children(node)),
        // Tokens with no value of their own read as an empty list
        NodeKind::Punct | NodeKind::Marker => Value::SExpr(Vec::new()),
    }
}

/// Read every semantic child of `node`, skipping brackets and markers
fn read_children(node: &Node) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| child.kind.is_semantic())
        .map(read)
        .collect()
}

fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => {
            tracing::debug!(literal = text, "rejected number literal");
            LispError::InvalidNumber.into()
        }
    }
}
