//! Configuration loading and resolution utilities.
//!
//! `load` layers config files, environment variables and CLI flags and
//! returns a [`ResolvedConfig`] that the workflow runs with.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
#[cfg(test)]
pub(crate) use resolved::ListingDefaults;
