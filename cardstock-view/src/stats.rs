//! Completion statistics for a checklist.

use cardstock_model::{CardRecord, CardStatus};

/// Status counts for one checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChecklistStats {
    pub total: usize,
    pub owned: usize,
    pub pending: usize,
    pub need: usize,
}

impl ChecklistStats {
    /// Completion percentage, rounded to the nearest whole percent.
    /// An empty checklist is 0% complete.
    pub fn completion_pct(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.owned as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}

/// Count a checklist's rows by status.
pub fn checklist_stats(items: &[CardRecord]) -> ChecklistStats {
    let mut stats = ChecklistStats {
        total: items.len(),
        ..ChecklistStats::default()
    };
    for item in items {
        match item.status {
            CardStatus::Owned => stats.owned += 1,
            CardStatus::Pending => stats.pending += 1,
            CardStatus::Need => stats.need += 1,
        }
    }
    stats
}
