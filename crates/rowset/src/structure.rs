use crate::value::Value;
use serde::Serialize;

///
/// Structured
///
/// Result of recursively converting a nested mapping into a named-field
/// record. `Leaf` carries non-mapping values through unchanged. The
/// structure is newly allocated and shares nothing with its input.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Structured {
    Record(Vec<(String, Self)>),
    Leaf(Value),
}

impl Structured {
    /// First record field under `name`; `None` on leaves.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        if let Self::Record(fields) = self {
            fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Value> {
        if let Self::Leaf(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

/// Recursively convert a nested mapping into a structured record.
///
/// Field names are trimmed of surrounding whitespace; an entry whose
/// trimmed name is empty is silently dropped. Non-mapping input passes
/// through as a leaf. An **empty** mapping yields `None` — the
/// conversion's failure sentinel, distinct from a record with no fields.
#[must_use]
pub fn to_structured(value: &Value) -> Option<Structured> {
    match value {
        Value::Map(entries) => {
            if entries.is_empty() {
                return None;
            }

            let mut fields = Vec::with_capacity(entries.len());
            for (name, value) in entries {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }

                fields.push((name.to_string(), convert_nested(value)));
            }

            Some(Structured::Record(fields))
        }

        other => Some(Structured::Leaf(other.clone())),
    }
}

// A nested empty mapping collapses to the boolean failure sentinel
// instead of an empty record.
fn convert_nested(value: &Value) -> Structured {
    to_structured(value).unwrap_or(Structured::Leaf(Value::Bool(false)))
}
