use crate::value::{Value, compare};
use std::cmp::Ordering;

///
/// Loose equality
///
/// Coercion is deliberately narrow: numeric variants widen against each
/// other, and text that parses as a number equals its numeric
/// counterpart. Every other pairing is strict. Absence of a rule means
/// the coercion is not permitted.
///

pub(crate) fn loose_eq(left: &Value, right: &Value) -> bool {
    if left == right {
        return true;
    }

    if left.is_numeric() && right.is_numeric() {
        return numeric_eq(left, right);
    }

    match (left, right) {
        (Value::Text(text), numeric) | (numeric, Value::Text(text)) if numeric.is_numeric() => {
            parsed_numeric(text).is_some_and(|parsed| numeric_eq(&parsed, numeric))
        }

        _ => false,
    }
}

fn numeric_eq(left: &Value, right: &Value) -> bool {
    compare::cmp_numeric(left, right) == Some(Ordering::Equal)
}

// Numeric-string recognition: integer forms keep exact width, everything
// else falls through to a finite float parse.
fn parsed_numeric(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Value::Int(i));
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Some(Value::Uint(u));
    }

    trimmed.parse::<f64>().ok().and_then(Value::float)
}
