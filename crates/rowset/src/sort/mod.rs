#[cfg(test)]
mod tests;

use crate::{
    error::SortError,
    key::RowKey,
    order::{OrderSpec, SortOrder},
    record::FieldLookup,
    rows::{Reindex, Rows},
    value::Value,
};
use std::cmp::Ordering;

///
/// Single-key sorting
///
/// Both single-key operations share one engine: resolve a sort value per
/// entry, stable-sort the positions of the entries that produced one,
/// and reassemble those survivors into a new collection. An entry whose
/// sort value does not resolve is absent from the output — the sortable
/// subset IS the result. The multi-key sort refuses instead; see
/// [`SortError`].
///

/// Sort mapping-or-scalar entries by the value under `field`.
///
/// Mapping entries resolve `field` by key; any other entry sorts by its
/// own value. Mapping entries lacking `field` are dropped from the
/// result. Ties keep their original relative order. The input is never
/// mutated.
#[must_use]
pub fn by_key(rows: &Rows<Value>, field: &str, order: SortOrder, reindex: Reindex) -> Rows<Value> {
    let positions = sorted_positions(rows, order, |row: &Value| match row {
        Value::Map(_) => row.get(field).cloned(),
        scalar => Some(scalar.clone()),
    });

    assemble(rows, &positions, reindex, 0)
}

/// Sort object rows by the named field, dropping falsy sort values.
///
/// An entry whose field is absent *or* resolves to a falsy value (see
/// [`Value::is_falsy`]) is excluded from the result. `limit > 0`
/// truncates to the first `limit` entries after sorting; `0` means
/// unlimited. The output is always a prefix of the unlimited sorted
/// order.
#[must_use]
pub fn by_field<T>(
    rows: &Rows<T>,
    field: &str,
    order: SortOrder,
    reindex: Reindex,
    limit: usize,
) -> Rows<T>
where
    T: FieldLookup + Clone,
{
    let positions = sorted_positions(rows, order, |row: &T| {
        row.field(field).filter(|value| !value.is_falsy())
    });

    assemble(rows, &positions, reindex, limit)
}

// Stable-sorted original positions of the entries whose sort value resolved.
fn sorted_positions<T>(
    rows: &Rows<T>,
    order: SortOrder,
    mut sort_value_of: impl FnMut(&T) -> Option<Value>,
) -> Vec<usize> {
    let mut sortable: Vec<(usize, Value)> = rows
        .iter()
        .enumerate()
        .filter_map(|(position, (_, row))| sort_value_of(row).map(|value| (position, value)))
        .collect();

    sortable.sort_by(|(_, left), (_, right)| order.apply(Value::canonical_cmp(left, right)));

    sortable.into_iter().map(|(position, _)| position).collect()
}

// Reassemble survivors in sorted-position order, honoring reindex/limit.
fn assemble<T: Clone>(
    rows: &Rows<T>,
    positions: &[usize],
    reindex: Reindex,
    limit: usize,
) -> Rows<T> {
    let keep = if limit > 0 {
        limit.min(positions.len())
    } else {
        positions.len()
    };

    positions
        .iter()
        .take(keep)
        .enumerate()
        .map(|(fresh, &position)| {
            let (key, row) = &rows[position];
            let key = if reindex.renumbers() {
                RowKey::Index(fresh)
            } else {
                key.clone()
            };

            (key, row.clone())
        })
        .collect()
}

///
/// Multi-key sorting
///

/// Lexicographic multi-key stable sort, in place.
///
/// The first spec field is the primary key; each later field breaks ties
/// among the preceding ones. Field comparison is case-insensitive: text
/// sort keys fold to lowercase for comparison only, and original casing
/// is preserved in the collection. Every row must carry every field
/// named by `spec`; on [`SortError::MissingField`] the collection keeps
/// its original order.
pub fn by_fields<T>(rows: &mut Rows<T>, spec: &OrderSpec) -> Result<(), SortError>
where
    T: FieldLookup,
{
    // Resolve every sort key up front so the error path reorders nothing.
    let mut sort_keys: Vec<Vec<Value>> = Vec::with_capacity(rows.len());
    for (key, row) in rows.iter() {
        let mut folded = Vec::with_capacity(spec.len());
        for (field, _) in spec.fields() {
            let value = row.field(field).ok_or_else(|| SortError::MissingField {
                key: key.clone(),
                field: field.clone(),
            })?;
            folded.push(value.folded_ci());
        }
        sort_keys.push(folded);
    }

    let entries = std::mem::take(rows.entries_mut());
    let mut decorated: Vec<(Vec<Value>, (RowKey, T))> =
        sort_keys.into_iter().zip(entries).collect();
    decorated.sort_by(|(left, _), (right, _)| compare_key_sets(spec, left, right));
    *rows.entries_mut() = decorated.into_iter().map(|(_, entry)| entry).collect();

    Ok(())
}

// First non-equal field decides, in spec priority order.
fn compare_key_sets(spec: &OrderSpec, left: &[Value], right: &[Value]) -> Ordering {
    for (slot, (_, order)) in spec.fields().iter().enumerate() {
        let ordering = order.apply(Value::canonical_cmp(&left[slot], &right[slot]));

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
