//! Device-local bookmarks keyed by record slug.

mod backend;
mod set;
mod store;

pub use backend::{BOOKMARKS_FILE_NAME, BookmarkBackend, BookmarkError, JsonFileBackend, MemoryBackend};
pub use set::BookmarkSet;
pub use store::{BookmarkStore, resolve_bookmarks};
