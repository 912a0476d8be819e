use crate::key::RowKey;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// Reindex
///
/// Key policy for assembled results: keep the original row keys (in their
/// new order) or renumber with fresh contiguous indices from zero.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Reindex {
    #[default]
    Preserve,
    Renumber,
}

impl Reindex {
    #[must_use]
    pub const fn renumbers(self) -> bool {
        matches!(self, Self::Renumber)
    }
}

///
/// Rows
///
/// Ordered keyed collection of rows. Entry order is the collection's
/// identity: every operation in this crate preserves or deliberately
/// re-derives it, and none retains a reference to the input.
///
/// Key uniqueness is not enforced; callers own their key discipline.
///

#[derive(Clone, Debug, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
pub struct Rows<T> {
    #[deref]
    #[into_iterator(owned, ref)]
    entries: Vec<(RowKey, T)>,
}

impl<T> Rows<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_entries(entries: Vec<(RowKey, T)>) -> Self {
        Self { entries }
    }

    /// Build an index-keyed collection from bare values.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (RowKey::Index(index), value))
                .collect(),
        }
    }

    pub fn push(&mut self, key: impl Into<RowKey>, value: T) {
        self.entries.push((key.into(), value));
    }

    /// First row stored under `key`.
    #[must_use]
    pub fn get(&self, key: &RowKey) -> Option<&T> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Discard key identity in favor of fresh contiguous indices.
    pub fn renumber(&mut self) {
        for (index, (key, _)) in self.entries.iter_mut().enumerate() {
            *key = RowKey::Index(index);
        }
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<(RowKey, T)> {
        &mut self.entries
    }
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(RowKey, T)> for Rows<T> {
    fn from_iter<I: IntoIterator<Item = (RowKey, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
