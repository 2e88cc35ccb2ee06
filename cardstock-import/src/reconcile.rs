//! De-duplicated checklist import.
//!
//! Candidates parsed from pasted text are keyed by
//! `card_number|player_name` (lowercased, trimmed) and filtered against
//! the set's existing rows before anything is written. Multi-year sets
//! extend the key with year and parallel so the same card number can
//! recur across years and parallel runs. Accepted rows are inserted in
//! fixed-size chunks, strictly in sequence, so a failed write leaves at
//! most the earlier chunks committed.

use std::collections::{HashMap, HashSet};

use cardstock_model::{CardRecord, NewCard};
use cardstock_parse::{ParsedCard, ParsedParallel};
use cardstock_store::{CardQuery, CardStore, StoreError};
use thiserror::Error;

use crate::progress::ImportProgress;

/// Rows per insert call. Oversized pastes are split so no single write
/// exceeds the backend's practical payload limit.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    /// A chunk write failed partway through an import. Chunks before
    /// `chunk` are committed and stay committed.
    #[error("Import failed at row {row} (chunk {chunk}): {source}")]
    ChunkFailed {
        /// 0-based index of the failed chunk.
        chunk: usize,
        /// 1-based row number of the first card in the failed chunk.
        row: usize,
        /// Rows committed by earlier chunks.
        inserted: usize,
        source: StoreError,
    },
}

/// Options controlling one import batch.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Extend the duplicate key with year and parallel.
    pub multi_year: bool,
    /// Parallel label applied to the whole batch (importing a page of
    /// "Refractor" rows, say). Folded into the duplicate key for
    /// multi-year sets, matching how existing-row keys are built.
    pub batch_parallel: Option<String>,
    pub chunk_size: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            multi_year: false,
            batch_parallel: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Why a candidate was skipped. Surfaced to the operator when an entire
/// batch collides, instead of a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMatch {
    /// "577 - Trevor Story"-style label for the incoming row.
    pub candidate: String,
    /// Label of the persisted row it collided with.
    pub existing: String,
    /// The normalized key both sides share.
    pub key: String,
}

/// A batch split into importable rows and duplicate diagnostics.
#[derive(Debug, Default)]
pub struct Partition {
    pub new: Vec<NewCard>,
    pub skipped: usize,
    pub duplicates: Vec<DuplicateMatch>,
}

/// Duplicate-detection key: `card_number|player_name`, lowercased and
/// trimmed; multi-year sets append `|year|parallel`.
fn natural_key(
    card_number: &str,
    player_name: &str,
    year: Option<i32>,
    parallel: Option<&str>,
    multi_year: bool,
) -> String {
    let base = format!(
        "{}|{}",
        card_number.trim().to_lowercase(),
        player_name.trim().to_lowercase()
    );
    if !multi_year {
        return base;
    }
    let year = year.map(|y| y.to_string()).unwrap_or_default();
    let parallel = parallel.map(str::to_lowercase).unwrap_or_default();
    format!("{base}|{year}|{parallel}")
}

/// Partition parsed candidates against the set's existing rows.
///
/// Error rows are ignored. Each skipped candidate records which persisted
/// row it matched so an all-duplicates import can be explained.
pub fn partition_candidates(
    candidates: &[ParsedCard],
    existing: &[CardRecord],
    options: &ImportOptions,
) -> Partition {
    let batch_parallel = options
        .batch_parallel
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let mut existing_by_key: HashMap<String, &CardRecord> = HashMap::new();
    for card in existing {
        let key = natural_key(
            &card.card_number,
            &card.player_name,
            card.year,
            card.parallel.as_deref(),
            options.multi_year,
        );
        existing_by_key.entry(key).or_insert(card);
    }

    let mut partition = Partition::default();

    for card in candidates.iter().filter(|c| c.is_valid()) {
        let key = natural_key(
            &card.card_number,
            &card.player_name,
            card.year,
            batch_parallel,
            options.multi_year,
        );
        match existing_by_key.get(&key) {
            Some(hit) => {
                partition.skipped += 1;
                partition.duplicates.push(DuplicateMatch {
                    candidate: format!("{} - {}", card.card_number, card.player_name),
                    existing: format!("{} - {}", hit.card_number, hit.player_name),
                    key,
                });
            }
            None => partition.new.push(NewCard {
                card_number: card.card_number.clone(),
                player_name: card.player_name.clone(),
                team: card.team.clone(),
                year: card.year,
                parallel: batch_parallel.map(str::to_string),
                ..NewCard::default()
            }),
        }
    }

    partition
}

/// Result of a bulk import.
#[derive(Debug)]
pub struct ImportOutcome {
    pub inserted: Vec<CardRecord>,
    /// Candidates skipped as duplicates of persisted rows.
    pub skipped: usize,
    /// Per-candidate diagnostics; inspect when `inserted` is empty to see
    /// which existing row each candidate matched.
    pub duplicates: Vec<DuplicateMatch>,
}

/// Import parsed checklist rows into a set, skipping duplicates.
///
/// Fetches the set's current rows, partitions the batch by natural key,
/// and inserts the new rows in sequential chunks of `options.chunk_size`.
/// Progress is reported after every committed chunk. An all-duplicates
/// batch is a successful no-op with diagnostics, not an error.
pub async fn import_cards<S: CardStore>(
    store: &S,
    set_id: &str,
    candidates: &[ParsedCard],
    options: &ImportOptions,
    progress: &dyn ImportProgress,
) -> Result<ImportOutcome, ImportError> {
    let existing = store.list_cards(set_id, &CardQuery::default()).await?;
    let Partition {
        new,
        skipped,
        duplicates,
    } = partition_candidates(candidates, &existing, options);

    if new.is_empty() {
        log::info!("import into {set_id}: all {skipped} candidates already exist");
        for dup in &duplicates {
            log::debug!(
                "  duplicate: {} matched {} ({})",
                dup.candidate,
                dup.existing,
                dup.key
            );
        }
        return Ok(ImportOutcome {
            inserted: Vec::new(),
            skipped,
            duplicates,
        });
    }

    let chunk_size = options.chunk_size.max(1);
    let total = new.len();
    let mut inserted = Vec::with_capacity(total);

    // Chunks go out one at a time; the next is not started until the
    // previous one lands.
    for (chunk_index, chunk) in new.chunks(chunk_size).enumerate() {
        match store.insert_cards(set_id, chunk.to_vec()).await {
            Ok(rows) => {
                inserted.extend(rows);
                progress.on_chunk(inserted.len(), total);
            }
            Err(source) => {
                return Err(ImportError::ChunkFailed {
                    chunk: chunk_index,
                    row: chunk_index * chunk_size + 1,
                    inserted: inserted.len(),
                    source,
                });
            }
        }
    }

    log::info!(
        "import into {set_id}: {} inserted, {skipped} duplicates skipped",
        inserted.len()
    );

    Ok(ImportOutcome {
        inserted,
        skipped,
        duplicates,
    })
}

/// The card a rainbow parallel batch attaches to.
#[derive(Debug, Clone)]
pub struct RainbowCard {
    pub card_number: String,
    pub player_name: String,
    pub team: Option<String>,
}

/// Import parsed parallels for one rainbow card.
///
/// Existing parallels for the card are matched case-insensitively by
/// name; only unseen parallels are inserted. Returns the inserted rows
/// plus the duplicate count.
pub async fn import_rainbow_parallels<S: CardStore>(
    store: &S,
    set_id: &str,
    card: &RainbowCard,
    parsed: &[ParsedParallel],
) -> Result<ImportOutcome, ImportError> {
    let card_number = card.card_number.trim();
    let query = CardQuery {
        card_number: Some(card_number.to_string()),
        ..CardQuery::default()
    };
    let existing = store.list_cards(set_id, &query).await?;

    let existing_names: HashSet<String> = existing
        .iter()
        .map(|c| c.parallel.as_deref().unwrap_or_default().to_lowercase())
        .collect();

    let valid: Vec<&ParsedParallel> = parsed.iter().filter(|p| p.is_valid()).collect();
    let rows: Vec<NewCard> = valid
        .iter()
        .filter(|p| !existing_names.contains(&p.parallel.to_lowercase()))
        .map(|p| NewCard {
            card_number: card_number.to_string(),
            player_name: card.player_name.trim().to_string(),
            team: card
                .team
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            parallel: Some(p.parallel.clone()),
            parallel_print_run: p.parallel_print_run.clone(),
            ..NewCard::default()
        })
        .collect();

    let skipped = valid.len() - rows.len();

    if rows.is_empty() {
        log::info!("rainbow import for {card_number}: all {skipped} parallels already exist");
        return Ok(ImportOutcome {
            inserted: Vec::new(),
            skipped,
            duplicates: Vec::new(),
        });
    }

    let inserted = store.insert_cards(set_id, rows).await?;
    Ok(ImportOutcome {
        inserted,
        skipped,
        duplicates: Vec::new(),
    })
}
