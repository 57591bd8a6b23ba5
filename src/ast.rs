use std::fmt;

/// Core value type of the interpreter.
///
/// Lists own their elements outright; moving a value into a list or out of it
/// is the only way ownership changes hands.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numbers (double precision only)
    Number(f64),
    /// Error raised during reading or evaluation, carrying its message
    Error(String),
    /// Symbols (operator and function names)
    Symbol(String),
    /// S-expression: evaluated as an application form
    SExpr(Vec<Value>),
    /// Q-expression: quoted list, never evaluated automatically
    QExpr(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
        }
    }
}

fn write_cells(
    f: &mut fmt::Formatter<'_>,
    open: char,
    cells: &[Value],
    close: char,
) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}

impl Value {
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

/// Remove the element at `index` and hand it to the caller.
pub fn pop(cells: &mut Vec<Value>, index: usize) -> Value {
    cells.remove(index)
}

/// Pop the element at `index` and drop the rest of the list.
pub fn take(mut cells: Vec<Value>, index: usize) -> Value {
    cells.swap_remove(index)
}

/// Move every element of `other` onto the end of `into`.
pub fn join(into: &mut Vec<Value>, mut other: Vec<Value>) {
    into.append(&mut other);
}
