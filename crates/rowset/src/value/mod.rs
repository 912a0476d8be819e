mod coerce;
mod compare;
mod float;


use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// re-exports
pub use float::Float64;
pub(crate) use compare::fold_ci;

///
/// Value
///
/// Dynamic value carried by row fields.
///
/// `Map` entries are insertion-ordered `(name, value)` pairs; entry order
/// is caller-visible and preserved by every operation in this crate.
/// Lookup returns the first entry with a matching name.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(Float64),
    Text(String),
    /// Ordered list of values.
    List(Vec<Self>),
    /// Insertion-ordered mapping from field name to value.
    Map(Vec<(String, Self)>),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::Map` from owned entries, preserving entry order.
    pub fn from_map<K, V>(entries: Vec<(K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Build a `Value::Float`, rejecting non-finite payloads.
    #[must_use]
    pub fn float(v: f64) -> Option<Self> {
        Float64::try_new(v).map(Self::Float)
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for the numeric variants that participate in
    /// numeric-widening comparison.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float(_))
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Map(_))
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&[(String, Self)]> {
        if let Self::Map(entries) = self {
            Some(entries.as_slice())
        } else {
            None
        }
    }

    /// First map entry under `key`, or `None` for non-mapping values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map()?
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    ///
    /// EMPTY / TRUTHINESS
    ///

    #[must_use]
    pub const fn is_empty(&self) -> Option<bool> {
        match self {
            Self::List(xs) => Some(xs.is_empty()),
            Self::Map(entries) => Some(entries.is_empty()),
            Self::Text(s) => Some(s.is_empty()),
            Self::Null => Some(true),

            _ => None,
        }
    }

    /// Loose falsiness used when assembling sortable subsets: null, false,
    /// numeric zero, the empty string, the literal `"0"`, and empty
    /// collections are all falsy.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Uint(u) => *u == 0,
            Self::Float(f) => f.get() == 0.0,
            Self::Text(s) => s.is_empty() || s == "0",
            Self::List(xs) => xs.is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }

    ///
    /// COMPARISON
    ///

    /// Total canonical comparator used by every sorting surface.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        compare::canonical_cmp(left, right)
    }

    /// Loose (coercive) equality: numeric variants widen, and numeric
    /// strings equal their numeric counterparts. Everything else is
    /// strict.
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        coerce::loose_eq(self, other)
    }

    /// Case-insensitive comparison key: text folds to lowercase, other
    /// variants pass through unchanged.
    #[must_use]
    pub fn folded_ci(&self) -> Self {
        match self {
            Self::Text(s) => Self::Text(fold_ci(s).into_owned()),
            other => other.clone(),
        }
    }
}

macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from! {
    bool    => Bool,
    i8      => Int,
    i16     => Int,
    i32     => Int,
    i64     => Int,
    u8      => Uint,
    u16     => Uint,
    u32     => Uint,
    u64     => Uint,
    Float64 => Float,
    &str    => Text,
    String  => Text,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}
