//! The generic enumerate/filter/delete engine.
//!
//! One engine serves all resource kinds; what varies per kind (request
//! shapes, field names, liveness) lives behind the adapter trait in
//! [`crate::resources`].

mod engine;
mod pagination;
mod staleness;
mod summary;

pub use engine::{PROTECTION_LABEL, Sweeper};
pub use pagination::list_all_pages;
pub use staleness::{DEFAULT_STALE_AFTER_HOURS, is_stale, is_stale_at};
pub use summary::{KindOutcome, SweepSummary};
