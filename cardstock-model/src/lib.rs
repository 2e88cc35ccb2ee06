//! Core data model for the card collection tracker.
//!
//! Defines the checklist row types shared by every crate in the workspace,
//! plus the text normalization and ordering rules that give checklists a
//! stable identity and display order. No I/O lives here; consumers can use
//! these types directly for serialization, display, or passing to a
//! `CardStore` implementation for persistence.

pub mod ordering;
pub mod text;
pub mod types;

pub use ordering::{compare_by_print_run, compare_card_numbers};
pub use text::{fold_accents, normalize_for_match};
pub use types::{CardEdit, CardRecord, CardSet, CardStatus, NewCard, SetKind};
