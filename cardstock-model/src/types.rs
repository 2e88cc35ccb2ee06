//! Data model types for card sets and checklist items.
//!
//! These types mirror the persistent checklist schema: sets, checklist
//! rows, insert payloads, and the edit shape written back by the item
//! editor. The backend assigns `id`, `created_at`, and `updated_at`.

use serde::{Deserialize, Serialize};

// ── Status ──────────────────────────────────────────────────────────────────

/// Ownership status of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    /// Not yet acquired.
    #[default]
    Need,
    /// Bought or traded for, not yet in hand.
    Pending,
    /// In the collection.
    Owned,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Need => "need",
            Self::Pending => "pending",
            Self::Owned => "owned",
        }
    }

    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "owned" | "have" => Self::Owned,
            "pending" => Self::Pending,
            _ => Self::Need,
        }
    }
}

// ── Set ─────────────────────────────────────────────────────────────────────

/// How a set organizes its checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    /// The numbered base checklist of a product.
    Base,
    /// A single-year insert set.
    Insert,
    /// One physical card tracked across its serialized parallels.
    Rainbow,
    /// An insert set whose checklist spans multiple years.
    MultiYearInsert,
}

impl SetKind {
    /// Multi-year sets carry a per-row year and group their checklist by it.
    pub fn is_multi_year(&self) -> bool {
        matches!(self, Self::MultiYearInsert)
    }

    /// Rainbow sets order rows by print run instead of card number.
    pub fn is_rainbow(&self) -> bool {
        matches!(self, Self::Rainbow)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Insert => "insert",
            Self::Rainbow => "rainbow",
            Self::MultiYearInsert => "multi_year_insert",
        }
    }
}

/// A card set: a named checklist sharing a year, brand, and product line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    pub id: String,
    pub name: String,
    /// Release year. `None` for multi-year insert sets.
    pub year: Option<i32>,
    pub brand: String,
    pub product_line: String,
    pub kind: SetKind,
    /// Named insert/chase set within the product, if any.
    pub insert_set_name: Option<String>,
    #[serde(default)]
    pub notes: String,
}

// ── Checklist Items ─────────────────────────────────────────────────────────

/// One persisted row of a set's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub set_id: String,
    pub card_number: String,
    pub player_name: String,
    pub team: Option<String>,
    pub subset_name: Option<String>,
    /// Present only on rows of multi-year sets.
    pub year: Option<i32>,
    /// Parallel/insert variant name. `None` is the base version.
    pub parallel: Option<String>,
    /// Print-run denominator ("50" for /50). Stored as text because some
    /// checklists annotate it with non-numeric suffixes.
    pub parallel_print_run: Option<String>,
    /// The serial numerator the collector owns ("17" for 17/50).
    pub serial_owned: Option<String>,
    pub status: CardStatus,
    /// Manual ordering override for rainbow checklists.
    pub display_order: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// A checklist row to be inserted. The store assigns id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub card_number: String,
    pub player_name: String,
    pub team: Option<String>,
    pub subset_name: Option<String>,
    pub year: Option<i32>,
    pub parallel: Option<String>,
    pub parallel_print_run: Option<String>,
    pub serial_owned: Option<String>,
    #[serde(default)]
    pub status: CardStatus,
    pub display_order: Option<i64>,
}

/// The editable field set written back by the edit form.
///
/// Edits replace the whole field set rather than patching individual
/// columns; the form always submits every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEdit {
    pub card_number: String,
    pub player_name: String,
    pub team: Option<String>,
    pub subset_name: Option<String>,
    pub year: Option<i32>,
    pub parallel: Option<String>,
    pub parallel_print_run: Option<String>,
    pub serial_owned: Option<String>,
    pub status: CardStatus,
}
