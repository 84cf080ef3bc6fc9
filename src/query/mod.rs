//! The listing pipeline and its pagination window.

mod pagination;
mod pipeline;

pub use pagination::{LOAD_MORE_DELAY, PAGE_SIZE, Pagination, SCROLL_RESTORE_DELAY};
pub use pipeline::{QueryOutcome, QueryParams, run_query};
