//! Free-text parsers for pasted checklist data.
//!
//! Two pasted formats feed the import flow: full checklists (one card per
//! line) and rainbow parallel lists (one parallel per line, all for a
//! single card). Both parsers are total: malformed lines come back as rows
//! carrying an `error` annotation rather than failing the batch, so the
//! operator can see exactly which lines need fixing.

pub mod checklist;
pub mod rainbow;

pub use checklist::{ParsedCard, parse_checklist_text};
pub use rainbow::{ParsedParallel, parse_rainbow_text};
