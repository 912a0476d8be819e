use crate::key::RowKey;
use thiserror::Error as ThisError;

///
/// SortError
///
/// Failures surfaced by the multi-key sort. The single-key operations are
/// total: an entry whose sort key cannot be resolved degrades to
/// exclusion instead of failing the call, so only the multi-key contract
/// — which requires every named field on every row — can error.
///
/// Empty input is never an error anywhere in this crate.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortError {
    #[error("row '{key}' is missing sort field '{field}'")]
    MissingField { key: RowKey, field: String },
}
