//! Parser for pasted rainbow parallel lists.
//!
//! Each line names one parallel of a single card, optionally followed by
//! its serial numbering:
//! ```text
//! Sky Blue – /499
//! Purple – /250
//! Platinum – 1/1
//! Base
//! ```
//! A line without a dash is a valid unnumbered parallel, not an error.

const NO_PARALLEL_NAME: &str = "Missing parallel name";

/// Characters accepted as the name/serial separator. Checklists pasted
/// from the web mix plain hyphens with en and em dashes.
const DASHES: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// One parsed parallel line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedParallel {
    pub parallel: String,
    /// Print-run denominator ("499" for /499). `None` for unnumbered.
    pub parallel_print_run: Option<String>,
    /// The input line as pasted, trimmed.
    pub raw_line: String,
    /// 1-based position among the non-blank input lines.
    pub line_number: usize,
    pub error: Option<String>,
}

impl ParsedParallel {
    /// Rows with a parse error must never be imported.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse a pasted parallel list, one parallel per non-blank line.
pub fn parse_rainbow_text(text: &str) -> Vec<ParsedParallel> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

fn parse_line(line: &str, line_number: usize) -> ParsedParallel {
    // Split at the LAST dash so dashes embedded in parallel names survive.
    let (name, serial) = match line.rfind(DASHES) {
        Some(i) => {
            let dash_len = line[i..].chars().next().map_or(1, char::len_utf8);
            (
                line[..i].trim_end(),
                Some(line[i + dash_len..].trim_start()),
            )
        }
        None => (line, None),
    };

    let parallel = name.to_string();
    let error = parallel
        .is_empty()
        .then(|| NO_PARALLEL_NAME.to_string());

    ParsedParallel {
        parallel,
        parallel_print_run: serial.and_then(parse_print_run),
        raw_line: line.to_string(),
        line_number,
        error,
    }
}

/// Extract the print-run denominator from the serial part of a line.
///
/// "/499" keeps everything after the slash; "1/1" keeps the denominator
/// and discards the numerator (that is the collector's copy, not part of
/// the checklist); bare digits pass through; anything else is treated as
/// unnumbered.
fn parse_print_run(serial: &str) -> Option<String> {
    if let Some(rest) = serial.strip_prefix('/') {
        let rest = rest.trim();
        (!rest.is_empty()).then(|| rest.to_string())
    } else if let Some(i) = serial.find('/') {
        let rest = serial[i + 1..].trim();
        (!rest.is_empty()).then(|| rest.to_string())
    } else if !serial.is_empty() && serial.chars().all(|c| c.is_ascii_digit()) {
        Some(serial.to_string())
    } else {
        None
    }
}
