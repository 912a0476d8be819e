use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// Record
///
/// Insertion-ordered mapping from field name to [`Value`] — one "object"
/// row as the rendering layer sees it. Assignment replaces an existing
/// field in place; new fields append.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Build a record from owned entries, preserving entry order.
    pub fn from_fields<K, V>(fields: Vec<(K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Assign `value` under `name`, replacing the first existing entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Map(record.fields)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_fields(iter.into_iter().collect())
    }
}

///
/// FieldLookup
///
/// Capability for resolving a named field to a value. This is the single
/// accessor seam used by the object-row operations: callers choose what
/// "field" means for their row type instead of the library inspecting
/// shapes at runtime.
///
/// A `None` return means the field is absent — distinct from a present
/// field holding [`Value::Null`].
///

pub trait FieldLookup {
    fn field(&self, name: &str) -> Option<Value>;
}

impl FieldLookup for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Build a [`Record`] from `name => value` pairs.
#[macro_export]
macro_rules! record {
    ( $( $name:expr => $value:expr ),* $(,)? ) => {{
        let mut record = $crate::record::Record::new();
        $( record.set($name, $crate::value::Value::from($value)); )*
        record
    }};
}
