//! Comparators for checklist display order.
//!
//! Card numbers mix alphabetic prefixes with numeric suffixes ("90AS-12",
//! "BDC-7"), so a plain string sort puts "90AS-10" before "90AS-2".
//! [`compare_card_numbers`] sorts the numeric tail numerically. Rainbow
//! checklists instead order by print run via [`compare_by_print_run`].

use std::cmp::Ordering;

use crate::types::CardRecord;

/// Split a card number into its prefix and trailing maximal digit run.
///
/// Returns `None` when the string does not end in a digit.
fn split_trailing_digits(s: &str) -> Option<(&str, &str)> {
    let run_start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    Some((&s[..run_start], &s[run_start..]))
}

/// Compare two digit runs numerically, degrading gracefully on overflow.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        // Runs too long for u64: a longer run is a larger number.
        _ => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
    }
}

/// Natural alphanumeric comparison for card numbers.
///
/// "90AS-2" sorts before "90AS-10": prefixes compare lexicographically and
/// trailing digit runs compare numerically. Strings without trailing digits
/// fall back to plain lexicographic order. Never panics.
pub fn compare_card_numbers(a: &str, b: &str) -> Ordering {
    match (split_trailing_digits(a), split_trailing_digits(b)) {
        (Some((pa, da)), Some((pb, db))) => pa.cmp(pb).then_with(|| compare_digit_runs(da, db)),
        _ => a.cmp(b),
    }
}

/// Print-run value used for rainbow ordering, if the stored text parses.
fn print_run_value(card: &CardRecord) -> Option<u64> {
    card.parallel_print_run.as_deref()?.trim().parse().ok()
}

/// Ordering for rainbow checklists.
///
/// Rows with an explicit `display_order` come first, ascending. Among the
/// rest, the unnumbered base parallel leads, then serial-numbered rows by
/// print run descending (most common first, 1/1s last). Print-run text
/// that does not parse as a number sorts after everything numbered.
pub fn compare_by_print_run(a: &CardRecord, b: &CardRecord) -> Ordering {
    match (a.display_order, b.display_order) {
        (Some(x), Some(y)) => return x.cmp(&y),
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (None, None) => {}
    }

    match (&a.parallel_print_run, &b.parallel_print_run) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(_), Some(_)) => match (print_run_value(a), print_run_value(b)) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}
