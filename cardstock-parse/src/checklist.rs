//! Parser for pasted plain-text checklists.
//!
//! Checklist lines follow the convention published by most card
//! manufacturers:
//! ```text
//! 577 Trevor Story - Boston Red Sox
//! ```
//! Card number first, then the player, then an optional team after a
//! ` - ` delimiter (or, failing that, a comma). The delimiter is searched
//! from the end of the line so hyphenated player names like
//! "Pete Crow-Armstrong" split correctly.

use cardstock_model::text::fold_accents;

const NO_PLAYER_NAME: &str = "Could not parse player name";

/// One parsed checklist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCard {
    pub card_number: String,
    pub player_name: String,
    pub team: Option<String>,
    pub year: Option<i32>,
    /// The input line as pasted, trimmed.
    pub raw_line: String,
    /// 1-based position among the non-blank input lines.
    pub line_number: usize,
    pub error: Option<String>,
}

impl ParsedCard {
    /// Rows with a parse error must never be imported.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse pasted checklist text, one card per non-blank line.
///
/// `default_year` is attached to every row; multi-year sets import one
/// year at a time. Blank lines are skipped; every other line produces a
/// row, with `error` set when no player name could be extracted.
pub fn parse_checklist_text(text: &str, default_year: Option<i32>) -> Vec<ParsedCard> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1, default_year))
        .collect()
}

fn parse_line(line: &str, line_number: usize, default_year: Option<i32>) -> ParsedCard {
    let Some(first_space) = line.find(' ') else {
        // A lone token can only be a card number.
        return ParsedCard {
            card_number: line.to_string(),
            player_name: String::new(),
            team: None,
            year: default_year,
            raw_line: line.to_string(),
            line_number,
            error: Some(NO_PLAYER_NAME.to_string()),
        };
    };

    let card_number = line[..first_space].trim().to_string();
    let remainder = line[first_space + 1..].trim();

    // " - " first (keeps hyphenated names intact), then the last comma.
    let (player, team) = if let Some(i) = remainder.rfind(" - ") {
        (&remainder[..i], Some(&remainder[i + 3..]))
    } else if let Some(i) = remainder.rfind(',') {
        (&remainder[..i], Some(&remainder[i + 1..]))
    } else {
        (remainder, None)
    };

    let player_name = fold_accents(player.trim());
    let team = team
        .map(|t| fold_accents(t.trim()))
        .filter(|t| !t.is_empty());
    let error = player_name
        .is_empty()
        .then(|| NO_PLAYER_NAME.to_string());

    ParsedCard {
        card_number,
        player_name,
        team,
        year: default_year,
        raw_line: line.to_string(),
        line_number,
        error,
    }
}
