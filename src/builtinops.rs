//! Built-in operations registry.
//!
//! Every builtin is registered once in [`BUILTIN_OPS`] with its name, arity and
//! implementation. The evaluator looks operations up by the symbol heading an
//! S-expression and hands over the remaining (already evaluated) elements.
//!
//! ```text
//! (+ 1 2 3)          ; arithmetic family, one fold routine per operator
//! (head {1 2 3})     ; list family, works on Q-expressions
//! (eval {+ 1 2})     ; turns a Q-expression back into code
//! ```
//!
//! ## Ownership
//!
//! Builtins take their argument vector by value. Whatever they do not move into
//! the result is dropped when they return, on success and error paths alike.
//!
//! ## Errors
//!
//! Implementations return `Result<Value, LispError>`; [`call`] flattens an
//! `Err` into a [`Value::Error`] so errors keep flowing as ordinary values.
//!
//! ## Adding New Operations
//!
//! 1. **Implement the function** following `fn(&'static str, Vec<Value>) -> Result<Value, LispError>`
//! 2. **Add it to BUILTIN_OPS** with its name and arity
//! 3. **Add tests** covering the error messages it can produce

use crate::LispError;
use crate::ast::{self, Value};
use crate::evaluator;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Represents the expected number of arguments for an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    /// Exactly n arguments required
    Exact(usize),
    /// At least n arguments required
    AtLeast(usize),
    /// Any number of arguments (0 or more)
    Any,
}

impl Arity {
    /// Check if the given number of arguments is valid for this arity constraint
    pub fn validate(&self, name: &'static str, arg_count: usize) -> Result<(), LispError> {
        match self {
            Arity::Exact(n) if arg_count > *n => Err(LispError::TooManyArguments(name)),
            Arity::Exact(n) | Arity::AtLeast(n) if arg_count < *n => {
                Err(LispError::TooFewArguments(name))
            }
            _ => Ok(()),
        }
    }
}

/// Arithmetic operator, resolved once per call rather than per fold step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

impl ArithOp {
    /// Combine accumulator and operand
    fn apply(self, x: f64, y: f64) -> Result<f64, LispError> {
        Ok(match self {
            ArithOp::Add => x + y,
            ArithOp::Sub => x - y,
            ArithOp::Mul => x * y,
            ArithOp::Div | ArithOp::Rem if y == 0.0 => return Err(LispError::DivisionByZero),
            ArithOp::Div => x / y,
            ArithOp::Rem => x % y,
            ArithOp::Pow => x.powf(y),
            ArithOp::Min => x.min(y),
            ArithOp::Max => x.max(y),
        })
    }
}

pub type BuiltinFn = fn(&'static str, Vec<Value>) -> Result<Value, LispError>;

/// Represents the implementation of a built-in operation
#[derive(Clone)]
pub enum OpKind {
    /// Member of the arithmetic family, sharing one fold routine
    Arithmetic(ArithOp),
    /// Any other operation
    Function(BuiltinFn),
}

impl std::fmt::Debug for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpKind::Arithmetic(op) => write!(f, "Arithmetic({:?})", op),
            OpKind::Function(_) => write!(f, "Function(<fn>)"),
        }
    }
}

/// Definition of a built-in operation
#[derive(Debug, Clone)]
pub struct BuiltinOp {
    /// The symbol naming this operation
    pub id: &'static str,
    /// The implementation of this operation
    pub op_kind: OpKind,
    /// Expected number of arguments
    pub arity: Arity,
}

impl BuiltinOp {
    /// Validate arity, then run the operation on `args`
    pub fn invoke(&self, args: Vec<Value>) -> Result<Value, LispError> {
        self.arity.validate(self.id, args.len())?;
        match &self.op_kind {
            OpKind::Arithmetic(op) => builtin_arith(*op, args),
            OpKind::Function(func) => func(self.id, args),
        }
    }
}

//
// Builtin Function Implementations
//

/// Fold numeric arguments left to right with `op`
pub fn builtin_arith(op: ArithOp, args: Vec<Value>) -> Result<Value, LispError> {
    let mut numbers = Vec::with_capacity(args.len());
    for arg in &args {
        match arg {
            Value::Number(n) => numbers.push(*n),
            _ => return Err(LispError::NonNumber),
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(LispError::TooFewArguments(arith_name(op)));
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return Ok(Value::Number(-first));
    }

    let mut acc = first;
    for &y in rest {
        acc = op.apply(acc, y)?;
    }
    Ok(Value::Number(acc))
}

fn arith_name(op: ArithOp) -> &'static str {
    BUILTIN_OPS
        .iter()
        .find(|builtin| matches!(builtin.op_kind, OpKind::Arithmetic(o) if o == op))
        .map(|builtin| builtin.id)
        .unwrap_or("arithmetic")
}

/// Unwrap a Q-expression argument or report a type error
fn expect_qexpr(name: &'static str, value: Value) -> Result<Vec<Value>, LispError> {
    match value {
        Value::QExpr(cells) => Ok(cells),
        _ => Err(LispError::IncorrectType(name)),
    }
}

/// Unwrap the only argument of a unary builtin
fn single_arg(name: &'static str, args: Vec<Value>) -> Result<Value, LispError> {
    Arity::Exact(1).validate(name, args.len())?;
    Ok(ast::take(args, 0))
}

/// Unwrap the single non-empty Q-expression argument of `head` and `tail`
fn single_nonempty_qexpr(name: &'static str, args: Vec<Value>) -> Result<Vec<Value>, LispError> {
    let cells = expect_qexpr(name, single_arg(name, args)?)?;
    if cells.is_empty() {
        return Err(LispError::EmptyList(name));
    }
    Ok(cells)
}

pub fn builtin_list(_name: &'static str, args: Vec<Value>) -> Result<Value, LispError> {
    Ok(Value::QExpr(args))
}

pub fn builtin_head(name: &'static str, args: Vec<Value>) -> Result<Value, LispError> {
    let cells = single_nonempty_qexpr(name, args)?;
    Ok(Value::QExpr(vec![ast::take(cells, 0)]))
}

pub fn builtin_tail(name: &'static str, args: Vec<Value>) -> Result<Value, LispError> {
    let mut cells = single_nonempty_qexpr(name, args)?;
    ast::pop(&mut cells, 0);
    Ok(Value::QExpr(cells))
}

pub fn builtin_join(name: &'static str, args: Vec<Value>) -> Result<Value, LispError> {
    if !args.iter().all(|arg| matches!(arg, Value::QExpr(_))) {
        return Err(LispError::IncorrectType(name));
    }

    let mut joined = Vec::new();
    for arg in args {
        ast::join(&mut joined, expect_qexpr(name, arg)?);
    }
    Ok(Value::QExpr(joined))
}

pub fn builtin_cons(name: &'static str, mut args: Vec<Value>) -> Result<Value, LispError> {
    if !matches!(args.first(), Some(Value::Number(_))) {
        return Err(LispError::IncorrectType(name));
    }

    let first = builtin_list(name, vec![ast::pop(&mut args, 0)])?;
    args.insert(0, first);
    builtin_join(name, args)
}

pub fn builtin_eval(name: &'static str, args: Vec<Value>) -> Result<Value, LispError> {
    let cells = expect_qexpr(name, single_arg(name, args)?)?;
    Ok(evaluator::eval(Value::SExpr(cells)))
}

/// Global registry of all built-in operations
static BUILTIN_OPS: &[BuiltinOp] = &[
    // Arithmetic operations
    BuiltinOp {
        id: "+",
        op_kind: OpKind::Arithmetic(ArithOp::Add),
        arity: Arity::AtLeast(1),
    },
    BuiltinOp {
        id: "-",
        op_kind: OpKind::Arithmetic(ArithOp::Sub),
        arity: Arity::AtLeast(1),
    },
    BuiltinOp {
        id: "*",
        op_kind: OpKind::Arithmetic(ArithOp::Mul),
        arity: Arity::AtLeast(1),
    },
    BuiltinOp {
        id: "/",
        op_kind: OpKind::Arithmetic(ArithOp::Div),
        arity: Arity::AtLeast(1),
    },
    BuiltinOp {
        id: "%",
        op_kind: OpKind::Arithmetic(ArithOp::Rem),
        arity: Arity::AtLeast(1),
    },
    BuiltinOp {
        id: "^",
        op_kind: OpKind::Arithmetic(ArithOp::Pow),
        arity: Arity::AtLeast(1),
    },
    BuiltinOp {
        id: "min",
        op_kind: OpKind::Arithmetic(ArithOp::Min),
        arity: Arity::AtLeast(1),
    },
    BuiltinOp {
        id: "max",
        op_kind: OpKind::Arithmetic(ArithOp::Max),
        arity: Arity::AtLeast(1),
    },
    // List operations
    BuiltinOp {
        id: "list",
        op_kind: OpKind::Function(builtin_list),
        arity: Arity::Any,
    },
    BuiltinOp {
        id: "head",
        op_kind: OpKind::Function(builtin_head),
        arity: Arity::Exact(1),
    },
    BuiltinOp {
        id: "tail",
        op_kind: OpKind::Function(builtin_tail),
        arity: Arity::Exact(1),
    },
    BuiltinOp {
        id: "join",
        op_kind: OpKind::Function(builtin_join),
        arity: Arity::Any,
    },
    BuiltinOp {
        id: "cons",
        op_kind: OpKind::Function(builtin_cons),
        arity: Arity::AtLeast(1),
    },
    // Evaluation
    BuiltinOp {
        id: "eval",
        op_kind: OpKind::Function(builtin_eval),
        arity: Arity::Exact(1),
    },
];

/// Lazy static map from id to BuiltinOp (private - use find_builtin_op)
static BUILTIN_MAP: LazyLock<HashMap<&'static str, &'static BuiltinOp>> =
    LazyLock::new(|| BUILTIN_OPS.iter().map(|op| (op.id, op)).collect());

/// Find a builtin op by the symbol naming it
pub fn find_builtin_op(id: &str) -> Option<&'static BuiltinOp> {
    BUILTIN_MAP.get(id).copied()
}

/// Dispatch `args` to the builtin named `id`. Always produces a value.
pub fn call(id: &str, args: Vec<Value>) -> Value {
    let Some(op) = find_builtin_op(id) else {
        tracing::debug!(symbol = id, "unknown function");
        return LispError::UnknownFunction.into();
    };

    tracing::trace!(op = op.id, argc = args.len(), "dispatch builtin");
    op.invoke(args).unwrap_or_else(Value::from)
}
