use crate::LispError;
use crate::ast::{self, Value};
use crate::builtinops;

/// Evaluate a value, consuming it.
///
/// Everything except an S-expression evaluates to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Value::SExpr(cells) => eval_sexpr(cells),
        // Self-evaluating forms
        other => other,
    }
}

/// Reduce an S-expression
fn eval_sexpr(cells: Vec<Value>) -> Value {
    // Evaluate children strictly left to right
    let mut cells: Vec<Value> = cells.into_iter().map(eval).collect();

    // First error by position wins
    if let Some(index) = cells.iter().position(Value::is_error) {
        return ast::take(cells, index);
    }

    match cells.len() {
        0 => Value::SExpr(cells),
        1 => ast::take(cells, 0),
        _ => match ast::pop(&mut cells, 0) {
            Value::Symbol(name) => builtinops::call(&name, cells),
            _ => LispError::NotASymbol.into(),
        },
    }
}
