//! CSV export of a checklist.

use std::io::Write;

use cardstock_model::CardRecord;
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

const HEADERS: [&str; 7] = [
    "Card Number",
    "Player Name",
    "Team",
    "Subset",
    "Parallel",
    "Serial Owned",
    "Status",
];

/// Write a checklist as CSV with every field quoted.
///
/// Rows come out in the order given; callers sort via
/// `cardstock_view::filter_cards` first if they want display order.
pub fn write_checklist_csv<W: Write>(writer: W, items: &[CardRecord]) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(HEADERS)?;
    for item in items {
        wtr.write_record([
            item.card_number.as_str(),
            item.player_name.as_str(),
            item.team.as_deref().unwrap_or(""),
            item.subset_name.as_deref().unwrap_or(""),
            item.parallel.as_deref().unwrap_or(""),
            item.serial_owned.as_deref().unwrap_or(""),
            item.status.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Download file name for a set's export: non-alphanumerics become `_`.
pub fn csv_file_name(set_name: &str) -> String {
    let stem: String = set_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}_checklist.csv")
}
