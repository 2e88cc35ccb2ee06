//! Search, status, and year filtering for checklist display.

use cardstock_model::ordering::{compare_by_print_run, compare_card_numbers};
use cardstock_model::text::normalize_for_match;
use cardstock_model::{CardRecord, CardSet, CardStatus};

/// Status filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CardStatus),
}

/// Active view filters for one checklist.
#[derive(Debug, Clone, Default)]
pub struct ChecklistFilter {
    /// Case- and accent-insensitive substring over card number, player,
    /// and team.
    pub search: String,
    pub status: StatusFilter,
    /// Restrict a multi-year set to one year. Ignored otherwise.
    pub year: Option<i32>,
}

/// Filter and sort a checklist for display.
///
/// An active search term suspends the status filter so matches surface
/// across all statuses. Rainbow sets sort by print run; everything else
/// sorts in natural card-number order.
pub fn filter_cards<'a>(
    items: &'a [CardRecord],
    filter: &ChecklistFilter,
    set: &CardSet,
) -> Vec<&'a CardRecord> {
    let term = normalize_for_match(&filter.search);
    let searching = !term.is_empty();

    let mut result: Vec<&CardRecord> = items
        .iter()
        .filter(|item| {
            searching
                || match filter.status {
                    StatusFilter::All => true,
                    StatusFilter::Only(status) => item.status == status,
                }
        })
        .filter(|item| {
            !set.kind.is_multi_year() || filter.year.is_none_or(|y| item.year == Some(y))
        })
        .filter(|item| !searching || matches_search(item, &term))
        .collect();

    if set.kind.is_rainbow() {
        result.sort_by(|a, b| compare_by_print_run(a, b));
    } else {
        result.sort_by(|a, b| compare_card_numbers(&a.card_number, &b.card_number));
    }

    result
}

fn matches_search(item: &CardRecord, term: &str) -> bool {
    normalize_for_match(&item.card_number).contains(term)
        || normalize_for_match(&item.player_name).contains(term)
        || item
            .team
            .as_deref()
            .is_some_and(|t| normalize_for_match(t).contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card, card_with};
    use cardstock_model::SetKind;

    fn set(kind: SetKind) -> CardSet {
        CardSet {
            id: "set-1".to_string(),
            name: "Test Set".to_string(),
            year: Some(2024),
            brand: "Topps".to_string(),
            product_line: "Chrome".to_string(),
            kind,
            insert_set_name: None,
            notes: String::new(),
        }
    }

    #[test]
    fn sorts_card_numbers_naturally() {
        let items = vec![
            card("10", "A", CardStatus::Need),
            card("2", "B", CardStatus::Need),
            card("1", "C", CardStatus::Need),
        ];

        let visible = filter_cards(&items, &ChecklistFilter::default(), &set(SetKind::Base));
        let numbers: Vec<&str> = visible.iter().map(|c| c.card_number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "10"]);
    }

    #[test]
    fn status_filter_narrows_the_list() {
        let items = vec![
            card("1", "A", CardStatus::Owned),
            card("2", "B", CardStatus::Need),
        ];
        let filter = ChecklistFilter {
            status: StatusFilter::Only(CardStatus::Need),
            ..ChecklistFilter::default()
        };

        let visible = filter_cards(&items, &filter, &set(SetKind::Base));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].card_number, "2");
    }

    #[test]
    fn search_suspends_the_status_filter() {
        let items = vec![
            card("1", "Trevor Story", CardStatus::Owned),
            card("2", "Other Player", CardStatus::Need),
        ];
        let filter = ChecklistFilter {
            search: "story".to_string(),
            status: StatusFilter::Only(CardStatus::Need),
            ..ChecklistFilter::default()
        };

        // The owned card still surfaces because a search is active.
        let visible = filter_cards(&items, &filter, &set(SetKind::Base));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].player_name, "Trevor Story");
    }

    #[test]
    fn search_is_accent_insensitive() {
        let mut item = card("11", "Jose Ramirez", CardStatus::Need);
        item.team = Some("Guardians".to_string());
        let items = vec![item];

        let filter = ChecklistFilter {
            search: "josé ramírez".to_string(),
            ..ChecklistFilter::default()
        };
        let visible = filter_cards(&items, &filter, &set(SetKind::Base));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn search_covers_number_player_and_team() {
        let mut item = card("BDC-7", "Jackson Holliday", CardStatus::Need);
        item.team = Some("Baltimore Orioles".to_string());
        let items = vec![item];
        let base = set(SetKind::Base);

        for term in ["bdc", "holliday", "baltimore"] {
            let filter = ChecklistFilter {
                search: term.to_string(),
                ..ChecklistFilter::default()
            };
            assert_eq!(filter_cards(&items, &filter, &base).len(), 1, "term {term}");
        }
    }

    #[test]
    fn year_filter_applies_only_to_multi_year_sets() {
        let items = vec![
            card_with("1", "A", Some(2023), None),
            card_with("2", "B", Some(2024), None),
        ];
        let filter = ChecklistFilter {
            year: Some(2024),
            ..ChecklistFilter::default()
        };

        let multi = filter_cards(&items, &filter, &set(SetKind::MultiYearInsert));
        assert_eq!(multi.len(), 1);
        assert_eq!(multi[0].card_number, "2");

        let single = filter_cards(&items, &filter, &set(SetKind::Base));
        assert_eq!(single.len(), 2);
    }

    #[test]
    fn rainbow_sets_sort_by_print_run() {
        let mut base = card("1", "A", CardStatus::Need);
        base.parallel = None;
        let mut fifty = card("1", "A", CardStatus::Need);
        fifty.parallel = Some("Gold".to_string());
        fifty.parallel_print_run = Some("50".to_string());
        let mut one_of_one = card("1", "A", CardStatus::Need);
        one_of_one.parallel = Some("Platinum".to_string());
        one_of_one.parallel_print_run = Some("1".to_string());

        let items = vec![one_of_one, fifty, base];
        let visible = filter_cards(&items, &ChecklistFilter::default(), &set(SetKind::Rainbow));
        let runs: Vec<Option<&str>> = visible
            .iter()
            .map(|c| c.parallel_print_run.as_deref())
            .collect();
        assert_eq!(runs, vec![None, Some("50"), Some("1")]);
    }
}
