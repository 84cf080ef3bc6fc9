//! Controllers that tie the pipeline, the bus and session state together.

mod favorites;
mod listing;

pub use favorites::FavoritesView;
pub use listing::{ListingView, ViewTask};
