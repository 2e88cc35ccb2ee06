//! Display-side derivations for a checklist: completion statistics,
//! search/status/year filtering, year and parallel grouping, and CSV
//! export.
//!
//! Everything here is pure: the UI owns the state, passes in the rows it
//! fetched, and renders what comes back.

pub mod export;
pub mod filter;
pub mod grouping;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use export::{ExportError, csv_file_name, write_checklist_csv};
pub use filter::{ChecklistFilter, StatusFilter, filter_cards};
pub use grouping::{ParallelGroup, ParallelSplit, YearGroup, group_by_year, split_parallels};
pub use stats::{ChecklistStats, checklist_stats};
