//! In-memory [`CardStore`] used by tests and local tooling.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use cardstock_model::{CardEdit, CardRecord, CardStatus, NewCard};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::{CardQuery, CardStore};

/// Reference [`CardStore`] backed by a btree map.
///
/// Semantics track the hosted backend closely enough for the import and
/// reconciliation tests: sequential ids, RFC 3339 timestamps,
/// last-write-wins updates, and a non-empty constraint on card number and
/// player name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<String, CardRecord>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        format!("card-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Total rows across all sets.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }
}

impl CardStore for MemoryStore {
    async fn list_cards(
        &self,
        set_id: &str,
        query: &CardQuery,
    ) -> Result<Vec<CardRecord>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .values()
            .filter(|r| r.set_id == set_id)
            .filter(|r| query.status.is_none_or(|s| r.status == s))
            .filter(|r| query.year.is_none_or(|y| r.year == Some(y)))
            .filter(|r| {
                query
                    .card_number
                    .as_deref()
                    .is_none_or(|n| r.card_number == n)
            })
            .cloned()
            .collect())
    }

    async fn insert_cards(
        &self,
        set_id: &str,
        rows_in: Vec<NewCard>,
    ) -> Result<Vec<CardRecord>, StoreError> {
        let now = Utc::now().to_rfc3339();
        let mut rows = self.rows.lock().await;
        let mut inserted = Vec::with_capacity(rows_in.len());

        for new in rows_in {
            if new.card_number.trim().is_empty() || new.player_name.trim().is_empty() {
                log::warn!("rejecting insert into {set_id}: empty card number or player name");
                return Err(StoreError::backend(
                    "card_number and player_name must be non-empty",
                ));
            }

            let id = self.next_id();
            let record = CardRecord {
                id: id.clone(),
                set_id: set_id.to_string(),
                card_number: new.card_number,
                player_name: new.player_name,
                team: new.team,
                subset_name: new.subset_name,
                year: new.year,
                parallel: new.parallel,
                parallel_print_run: new.parallel_print_run,
                serial_owned: new.serial_owned,
                status: new.status,
                display_order: new.display_order,
                created_at: now.clone(),
                updated_at: now.clone(),
            };
            rows.insert(id, record.clone());
            inserted.push(record);
        }

        Ok(inserted)
    }

    async fn update_card_status(
        &self,
        ids: &[String],
        status: CardStatus,
    ) -> Result<u64, StoreError> {
        let now = Utc::now().to_rfc3339();
        let mut rows = self.rows.lock().await;
        let mut changed = 0;
        for id in ids {
            if let Some(row) = rows.get_mut(id) {
                row.status = status;
                row.updated_at = now.clone();
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn update_card_fields(&self, id: &str, edit: &CardEdit) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        let row = rows.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;

        row.card_number = edit.card_number.clone();
        row.player_name = edit.player_name.clone();
        row.team = edit.team.clone();
        row.subset_name = edit.subset_name.clone();
        row.year = edit.year;
        row.parallel = edit.parallel.clone();
        row.parallel_print_run = edit.parallel_print_run.clone();
        row.serial_owned = edit.serial_owned.clone();
        row.status = edit.status;
        row.updated_at = Utc::now().to_rfc3339();
        Ok(())
    }

    async fn update_card_year(
        &self,
        ids: &[String],
        year: Option<i32>,
    ) -> Result<u64, StoreError> {
        let now = Utc::now().to_rfc3339();
        let mut rows = self.rows.lock().await;
        let mut changed = 0;
        for id in ids {
            if let Some(row) = rows.get_mut(id) {
                row.year = year;
                row.updated_at = now.clone();
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn delete_cards(&self, ids: &[String]) -> Result<u64, StoreError> {
        let mut rows = self.rows.lock().await;
        let mut removed = 0;
        for id in ids {
            if rows.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
