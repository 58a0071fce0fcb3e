//! # filedrop-ingest
//!
//! Turns a drop payload into a flat list of files plus the set of empty
//! directories that must be created remotely.
//!
//! [`EntryWalker`] resolves one dropped entry, looping over paginated
//! directory reads until exhaustion. [`IngestionCollector`] fans the walker
//! out over every top-level item, merges the results, and applies the
//! [`SizeFilter`].

pub mod collector;
pub mod filter;
pub mod walker;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::{IngestionCollector, IngestionResult};
pub use filter::{SizeFilter, SizeRejection};
pub use walker::{EntryWalker, IngestionWarning, WalkOutcome};
