use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, str::FromStr};
use thiserror::Error as ThisError;

///
/// SortOrder
///
/// Ordering direction, accepted uniformly by every sorting operation.
/// The lowercase literals `"asc"` and `"desc"` parse to the same two
/// members; there is no other spelling.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Apply this direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseSortOrderError {
                literal: other.to_string(),
            }),
        }
    }
}

///
/// ParseSortOrderError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unrecognized sort order literal: '{literal}'")]
pub struct ParseSortOrderError {
    pub literal: String,
}

///
/// OrderSpec
///
/// Ordered multi-key specification. The first field is the primary sort
/// key; each subsequent field breaks ties among the preceding ones.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrderSpec {
    fields: Vec<(String, SortOrder)>,
}

impl OrderSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append one sort key, lowest priority so far.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, order: SortOrder) -> Self {
        self.fields.push((name.into(), order));
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, SortOrder)] {
        &self.fields
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
