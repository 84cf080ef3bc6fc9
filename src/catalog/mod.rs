//! Dataset loading and the flattened record store.

pub mod check;
mod error;
mod record;
mod store;

pub use check::{CheckOptions, DataIssue, DataReport, IssueKind, check_categories};
pub use error::CatalogError;
pub use record::{Category, Entry, Record};
pub use store::{ALL_CATEGORIES, CategoryInfo, DatasetFile, RecordStore};
