//! # HoagieLisp
//!
//! A tiny tree-walking Lisp with two list flavours:
//!
//! - **S-expressions** `( ... )` are evaluated: the first element names a builtin
//!   and the rest are its arguments.
//! - **Q-expressions** `{ ... }` are quoted data and are never evaluated unless
//!   handed to `eval`.
//!
//! ```text
//! hoagie> + 1 (* 2 3)
//! 7
//! hoagie> head {1 2 3}
//! {1}
//! hoagie> eval (join {+} {1 2})
//! 3
//! ```
//!
//! The pipeline is `parser::parse` (text to syntax tree), `reader::read` (syntax
//! tree to [`Value`]), then `evaluator::eval`. Errors raised while evaluating are
//! ordinary values ([`Value::Error`]) so they print and propagate like anything
//! else; only malformed source text produces a Rust-level [`ParseError`].

use thiserror::Error;

/// In-language error conditions. Each one becomes a [`Value::Error`] carrying
/// its display string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LispError {
    #[error("invalid number")]
    InvalidNumber,
    #[error("S-expression does not start with a symbol!")]
    NotASymbol,
    #[error("Unknown Function!")]
    UnknownFunction,
    #[error("Cannot operate on non-number!")]
    NonNumber,
    #[error("Division By Zero!")]
    DivisionByZero,
    #[error("Function '{0}' passed too many arguments!")]
    TooManyArguments(&'static str),
    #[error("Function '{0}' passed too few arguments!")]
    TooFewArguments(&'static str),
    #[error("Function '{0}' passed incorrect type!")]
    IncorrectType(&'static str),
    #[error("Function '{0}' passed {{}}!")]
    EmptyList(&'static str),
}

impl From<LispError> for Value {
    fn from(err: LispError) -> Self {
        Value::Error(err.to_string())
    }
}

/// Failure to turn source text into a syntax tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected '{found}' at position {position}")]
    Unexpected { found: char, position: usize },
    #[error("unexpected end of input")]
    UnexpectedEof,
}

pub mod ast;
pub mod builtinops;
pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod syntax;

pub use ast::Value;
pub use syntax::{Node, NodeKind};

/// Parse, read and evaluate a whole input line.
pub fn eval_str(input: &str) -> Result<Value, ParseError> {
    let tree = parser::parse(input)?;
    Ok(evaluator::eval(reader::read(&tree)))
}
