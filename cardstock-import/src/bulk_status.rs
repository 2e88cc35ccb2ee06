//! Bulk status reconciliation from pasted card numbers.
//!
//! The operator pastes a list of card numbers (full checklist rows work
//! too; only the first token of each line is used), previews which rows
//! match, and applies the status change in one batched write.

use std::collections::HashMap;

use cardstock_model::{CardRecord, CardStatus};
use cardstock_store::CardStore;

use crate::reconcile::ImportError;

/// One pasted identifier and the row it matched, if any.
#[derive(Debug, Clone)]
pub struct StatusMatch {
    pub identifier: String,
    pub matched: Option<CardRecord>,
}

/// A previewed status change. Nothing is written until
/// [`apply_status_update`] runs.
#[derive(Debug)]
pub struct StatusPlan {
    pub target: CardStatus,
    /// One entry per pasted line, in input order, matched or not.
    pub matches: Vec<StatusMatch>,
    /// Ids of matched rows whose status differs from the target.
    pub update_ids: Vec<String>,
}

impl StatusPlan {
    pub fn matched_count(&self) -> usize {
        self.matches.iter().filter(|m| m.matched.is_some()).count()
    }

    pub fn unmatched_count(&self) -> usize {
        self.matches.len() - self.matched_count()
    }

    /// Matched rows already at the target status.
    pub fn already_correct_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.matched.as_ref().is_some_and(|c| c.status == self.target))
            .count()
    }

    /// Rows the apply step will actually touch.
    pub fn will_update_count(&self) -> usize {
        self.update_ids.len()
    }
}

/// Match pasted identifiers against a checklist and plan a status change.
///
/// Matching is by lowercase card number. Every non-blank pasted line
/// produces exactly one entry in the plan, so the preview never drops an
/// unmatched row.
pub fn plan_status_update(text: &str, items: &[CardRecord], target: CardStatus) -> StatusPlan {
    let by_number: HashMap<String, &CardRecord> = items
        .iter()
        .map(|item| (item.card_number.to_lowercase(), item))
        .collect();

    let mut matches = Vec::new();
    let mut update_ids = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        // A full pasted row still matches on its leading card number.
        let identifier = line.split_whitespace().next().unwrap_or(line);
        let matched = by_number
            .get(&identifier.to_lowercase())
            .map(|card| (*card).clone());

        if let Some(card) = &matched
            && card.status != target
        {
            update_ids.push(card.id.clone());
        }

        matches.push(StatusMatch {
            identifier: identifier.to_string(),
            matched,
        });
    }

    StatusPlan {
        target,
        matches,
        update_ids,
    }
}

/// Apply a previewed status change in one batched write.
///
/// Rows already at the target status are left alone. Returns the number
/// of rows updated; a plan with nothing to do returns 0 without touching
/// the store.
pub async fn apply_status_update<S: CardStore>(
    store: &S,
    plan: &StatusPlan,
) -> Result<u64, ImportError> {
    if plan.update_ids.is_empty() {
        return Ok(0);
    }
    Ok(store
        .update_card_status(&plan.update_ids, plan.target)
        .await?)
}
