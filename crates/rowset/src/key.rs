use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// RowKey
///
/// Identity of one row inside a keyed collection. Integer keys come from
/// positional assembly (and from [`Reindex::Renumber`](crate::rows::Reindex));
/// named keys come from caller-supplied mappings.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum RowKey {
    #[display("{_0}")]
    Index(usize),
    #[display("{_0}")]
    Name(String),
}

impl RowKey {
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        if let Self::Index(index) = self {
            Some(*index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        if let Self::Name(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }
}

impl From<usize> for RowKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for RowKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for RowKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
