use crate::value::Value;
use std::{borrow::Cow, cmp::Ordering};

///
/// CONSTANTS
///

const F64_SAFE_I64: i64 = 1i64 << 53;
const F64_SAFE_U64: u64 = 1u64 << 53;

///
/// Canonical Value Rank
///
/// Stable rank used for cross-variant ordering. All numeric variants share
/// one rank so that widening comparison decides their relative order.
///

const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Uint(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
        Value::List(_) => 4,
        Value::Map(_) => 5,
    }
}

/// Total canonical comparator used by every sorting surface.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub(crate) fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => canonical_cmp_list(a, b),
        (Value::Map(a), Value::Map(b)) => canonical_cmp_map(a, b),
        (Value::Null, Value::Null) => Ordering::Equal,

        // Remaining same-rank pairs are the numeric variants. Values whose
        // widened representations collide (or exceed the f64-safe integer
        // range) tie; the stable sorts above preserve their input order.
        _ => cmp_numeric(left, right).unwrap_or(Ordering::Equal),
    }
}

/// Cross-variant numeric comparison; returns None if either side is
/// non-numeric or cannot be represented losslessly.
pub(crate) fn cmp_numeric(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(a.cmp(b)),

        (Value::Int(a), Value::Uint(b)) => Some(cmp_int_uint(*a, *b)),
        (Value::Uint(a), Value::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),

        _ => {
            let a = to_f64_lossless(left)?;
            let b = to_f64_lossless(right)?;

            a.partial_cmp(&b)
        }
    }
}

const fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        #[allow(clippy::cast_sign_loss)]
        let a = a as u64;
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

// casts stay within the 2^53-safe integer range guarded above
#[expect(clippy::cast_precision_loss)]
fn to_f64_lossless(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(f.get()),
        Value::Int(i) if (-F64_SAFE_I64..=F64_SAFE_I64).contains(i) => Some(*i as f64),
        Value::Uint(u) if *u <= F64_SAFE_U64 => Some(*u as f64),

        _ => None,
    }
}

fn canonical_cmp_list(left: &[Value], right: &[Value]) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn canonical_cmp_map(left: &[(String, Value)], right: &[(String, Value)]) -> Ordering {
    for ((left_name, left_value), (right_name, right_value)) in left.iter().zip(right.iter()) {
        let name_cmp = left_name.cmp(right_name);
        if name_cmp != Ordering::Equal {
            return name_cmp;
        }

        let value_cmp = canonical_cmp(left_value, right_value);
        if value_cmp != Ordering::Equal {
            return value_cmp;
        }
    }

    left.len().cmp(&right.len())
}

///
/// TEXT FOLDING
///

pub(crate) fn fold_ci(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Owned(s.to_ascii_lowercase());
    }
    // NOTE: Unicode fallback — to_lowercase stands in for full casefold.
    Cow::Owned(s.to_lowercase())
}
