//! Property-based tests for the reader and evaluator.
//!
//! 1. Numeric literals read and evaluate to the number they spell, and the
//!    rendered number reads back to the same value.
//! 2. Evaluation is idempotent: eval(eval(v)) == eval(v).

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use hoagie::{Value, eval_str, evaluator};
use proptest::prelude::*;

// -- Generation Strategies --

/// Generate a decimal literal in the number grammar
fn number_literal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("-?[0-9]{1,12}(\\.[0-9]{1,6})?").expect("valid regex")
}

fn symbol_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "^", "min", "max", "list", "head", "tail", "join", "cons",
        "eval", "nope",
    ])
    .prop_map(str::to_string)
}

/// Generate arbitrary (mostly well-formed) program text
fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (-100i32..100).prop_map(|n| n.to_string()),
        symbol_strategy(),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_flat_map(|items| {
            let body = items.join(" ");
            prop_oneof![
                Just(format!("({})", body)),
                Just(format!("{{{}}}", body)),
            ]
        })
    })
}

proptest! {
    #[test]
    fn numeric_literal_round_trip(literal in number_literal_strategy()) {
        let expected: f64 = literal.parse().unwrap();
        let value = eval_str(&literal).unwrap();
        prop_assert_eq!(&value, &Value::Number(expected));

        let rendered = value.to_string();
        prop_assert_eq!(eval_str(&rendered).unwrap(), value);
    }

    #[test]
    fn eval_is_idempotent(src in expr_strategy()) {
        let once = eval_str(&src).unwrap();
        let twice = evaluator::eval(once.clone());
        // Compare renderings so NaN results still count as equal
        prop_assert_eq!(twice.to_string(), once.to_string());
    }
}
