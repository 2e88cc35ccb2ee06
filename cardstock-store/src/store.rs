//! The persistence collaborator the reconciliation core depends on.

use cardstock_model::{CardEdit, CardRecord, CardStatus, NewCard};

use crate::error::StoreError;

/// Row filters for [`CardStore::list_cards`].
#[derive(Debug, Clone, Default)]
pub struct CardQuery {
    pub status: Option<CardStatus>,
    pub year: Option<i32>,
    /// Exact card-number match. Rainbow imports fetch one card's rows.
    pub card_number: Option<String>,
}

/// Async persistence collaborator for checklist rows.
///
/// The production implementation lives in the application layer, backed by
/// the hosted database; [`crate::MemoryStore`] provides the reference
/// semantics for tests. Implementations must tolerate repeated
/// `insert_cards` calls per logical import (the reconciler writes in
/// chunks) and batched id lists for status/year/delete operations.
#[allow(async_fn_in_trait)]
pub trait CardStore {
    /// List a set's checklist rows, optionally filtered.
    async fn list_cards(
        &self,
        set_id: &str,
        query: &CardQuery,
    ) -> Result<Vec<CardRecord>, StoreError>;

    /// Insert rows into a set's checklist, returning the stored rows.
    async fn insert_cards(
        &self,
        set_id: &str,
        rows: Vec<NewCard>,
    ) -> Result<Vec<CardRecord>, StoreError>;

    /// Set the status of every row in `ids`. Returns the rows changed.
    async fn update_card_status(
        &self,
        ids: &[String],
        status: CardStatus,
    ) -> Result<u64, StoreError>;

    /// Replace the editable fields of one row.
    async fn update_card_fields(&self, id: &str, edit: &CardEdit) -> Result<(), StoreError>;

    /// Move rows to a different year (multi-year sets). Returns the rows
    /// changed.
    async fn update_card_year(&self, ids: &[String], year: Option<i32>)
    -> Result<u64, StoreError>;

    /// Delete rows by id. Returns the number removed.
    async fn delete_cards(&self, ids: &[String]) -> Result<u64, StoreError>;
}
