//! Ordered keyed row collections: field-ordered sorting, value filtering,
//! and structural conversion of nested mappings, for preparing selection
//! lists and tabular views.
//!
//! Every operation is synchronous and pure: inputs are caller-owned, no
//! state is retained between calls, and the only in-place mutation is the
//! multi-key sort, which takes the collection by `&mut`.

// public exports are one module level down
pub mod error;
pub mod filter;
pub mod key;
pub mod order;
pub mod record;
pub mod rows;
pub mod sort;
pub mod structure;
pub mod themes;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        key::RowKey,
        order::{OrderSpec, SortOrder},
        record::{FieldLookup, Record},
        rows::{Reindex, Rows},
        value::Value,
    };
}
