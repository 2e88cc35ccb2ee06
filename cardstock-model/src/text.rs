//! Text normalization shared by parsing, matching, and search.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold accented characters to their unaccented equivalents.
///
/// Decomposes to NFD and drops combining marks, so "José Ramírez" becomes
/// "Jose Ramirez". Characters without a decomposition pass through
/// unchanged.
pub fn fold_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Normalize a string for case- and accent-insensitive matching.
pub fn normalize_for_match(s: &str) -> String {
    fold_accents(s.trim()).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_common_accents() {
        assert_eq!(fold_accents("José Ramírez"), "Jose Ramirez");
        assert_eq!(fold_accents("Peña"), "Pena");
        assert_eq!(fold_accents("Müller"), "Muller");
    }

    #[test]
    fn leaves_ascii_untouched() {
        assert_eq!(fold_accents("Trevor Story"), "Trevor Story");
    }

    #[test]
    fn match_normalization_is_case_and_accent_insensitive() {
        assert_eq!(normalize_for_match("  José Ramírez "), "jose ramirez");
        assert_eq!(normalize_for_match("José"), normalize_for_match("jose"));
    }
}
