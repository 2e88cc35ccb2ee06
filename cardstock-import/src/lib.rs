//! Bulk import and reconciliation against a persisted checklist.
//!
//! This crate owns the write-path logic: de-duplicated checklist import
//! with chunked inserts, rainbow parallel import, and bulk status
//! reconciliation. Matching is by normalized natural key throughout, so
//! repeating an import is idempotent rather than destructive.

pub mod bulk_status;
pub mod guard;
pub mod progress;
pub mod reconcile;

pub use bulk_status::{StatusMatch, StatusPlan, apply_status_update, plan_status_update};
pub use guard::{OpGuard, OpToken};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use reconcile::{
    DEFAULT_CHUNK_SIZE, DuplicateMatch, ImportError, ImportOptions, ImportOutcome, Partition,
    RainbowCard, import_cards, import_rainbow_parallels, partition_candidates,
};
