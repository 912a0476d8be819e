use crate::{
    record::FieldLookup,
    rows::{Reindex, Rows},
    value::Value,
};

/// Keep the rows whose `field` loosely equals `target`.
///
/// Equality is coercive: numeric variants widen against each other and
/// numeric strings equal their numeric counterparts (see
/// [`Value::loose_eq`]). A row without `field` is skipped — absence is a
/// non-match, not an error. The input is never mutated; surviving rows
/// keep their original keys unless `reindex` renumbers them.
#[must_use]
pub fn by_value<T>(rows: &Rows<T>, field: &str, target: &Value, reindex: Reindex) -> Rows<T>
where
    T: FieldLookup + Clone,
{
    let mut kept: Rows<T> = rows
        .iter()
        .filter(|(_, row)| {
            row.field(field)
                .is_some_and(|value| value.loose_eq(target))
        })
        .cloned()
        .collect();

    if reindex.renumbers() {
        kept.renumber();
    }

    kept
}
