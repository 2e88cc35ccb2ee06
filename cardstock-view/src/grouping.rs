//! Year and parallel grouping for checklist display.

use cardstock_model::{CardRecord, CardSet, CardStatus};

/// Cards under one parallel label, in display order.
#[derive(Debug)]
pub struct ParallelGroup<'a> {
    pub name: String,
    pub cards: Vec<&'a CardRecord>,
}

/// Base cards first, then parallel subgroups keyed by name.
#[derive(Debug, Default)]
pub struct ParallelSplit<'a> {
    pub base: Vec<&'a CardRecord>,
    pub parallels: Vec<ParallelGroup<'a>>,
}

/// One year's slice of a multi-year checklist.
#[derive(Debug)]
pub struct YearGroup<'a> {
    /// `None` collects rows that never got a year assigned.
    pub year: Option<i32>,
    pub cards: ParallelSplit<'a>,
    pub total: usize,
    /// Shown in the year header as "(owned/total owned)".
    pub owned: usize,
}

/// Split display-ordered cards into base rows and parallel subgroups.
///
/// Parallel groups appear in the order their name is first encountered,
/// which preserves the incoming sort within and across groups.
pub fn split_parallels<'a>(cards: &[&'a CardRecord]) -> ParallelSplit<'a> {
    let mut split = ParallelSplit::default();
    for &card in cards {
        match card.parallel.as_deref() {
            None => split.base.push(card),
            Some(name) => match split.parallels.iter_mut().find(|g| g.name == name) {
                Some(group) => group.cards.push(card),
                None => split.parallels.push(ParallelGroup {
                    name: name.to_string(),
                    cards: vec![card],
                }),
            },
        }
    }
    split
}

/// Group a filtered multi-year checklist by year for display.
///
/// Years ascend with the no-year group last. Returns `None` for
/// single-year sets or when a year filter is active; those render as a
/// flat (but still parallel-split) list.
pub fn group_by_year<'a>(
    cards: &[&'a CardRecord],
    set: &CardSet,
    year_filter: Option<i32>,
) -> Option<Vec<YearGroup<'a>>> {
    if !set.kind.is_multi_year() || year_filter.is_some() {
        return None;
    }

    let mut years: Vec<Option<i32>> = Vec::new();
    for card in cards {
        if !years.contains(&card.year) {
            years.push(card.year);
        }
    }
    years.sort_by(|a, b| match (a, b) {
        (None, None) => std::cmp::Ordering::Equal,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (Some(_), None) => std::cmp::Ordering::Less,
        (Some(x), Some(y)) => x.cmp(y),
    });

    let groups = years
        .into_iter()
        .map(|year| {
            let members: Vec<&CardRecord> = cards
                .iter()
                .copied()
                .filter(|c| c.year == year)
                .collect();
            let owned = members
                .iter()
                .filter(|c| c.status == CardStatus::Owned)
                .count();
            YearGroup {
                year,
                total: members.len(),
                owned,
                cards: split_parallels(&members),
            }
        })
        .collect();

    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::card_with;
    use cardstock_model::SetKind;

    fn multi_year_set() -> CardSet {
        CardSet {
            id: "set-1".to_string(),
            name: "Test Set".to_string(),
            year: None,
            brand: "Topps".to_string(),
            product_line: "Chrome".to_string(),
            kind: SetKind::MultiYearInsert,
            insert_set_name: Some("All Aboard".to_string()),
            notes: String::new(),
        }
    }

    #[test]
    fn years_ascend_with_the_no_year_group_last() {
        let items = vec![
            card_with("1", "A", None, None),
            card_with("2", "B", Some(2024), None),
            card_with("3", "C", Some(2022), None),
        ];
        let refs: Vec<&CardRecord> = items.iter().collect();

        let groups = group_by_year(&refs, &multi_year_set(), None).unwrap();
        let years: Vec<Option<i32>> = groups.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![Some(2022), Some(2024), None]);
    }

    #[test]
    fn year_groups_count_owned_cards() {
        let mut owned = card_with("1", "A", Some(2023), None);
        owned.status = CardStatus::Owned;
        let items = vec![owned, card_with("2", "B", Some(2023), None)];
        let refs: Vec<&CardRecord> = items.iter().collect();

        let groups = group_by_year(&refs, &multi_year_set(), None).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].total, 2);
        assert_eq!(groups[0].owned, 1);
    }

    #[test]
    fn grouping_is_skipped_under_a_year_filter() {
        let items = vec![card_with("1", "A", Some(2023), None)];
        let refs: Vec<&CardRecord> = items.iter().collect();

        assert!(group_by_year(&refs, &multi_year_set(), Some(2023)).is_none());

        let mut single = multi_year_set();
        single.kind = SetKind::Insert;
        assert!(group_by_year(&refs, &single, None).is_none());
    }

    #[test]
    fn parallels_render_after_base_cards() {
        let items = vec![
            card_with("1", "A", None, Some("Refractor")),
            card_with("2", "B", None, None),
            card_with("3", "C", None, Some("Gold")),
            card_with("4", "D", None, Some("Refractor")),
        ];
        let refs: Vec<&CardRecord> = items.iter().collect();

        let split = split_parallels(&refs);
        assert_eq!(split.base.len(), 1);
        assert_eq!(split.base[0].card_number, "2");
        assert_eq!(split.parallels.len(), 2);
        assert_eq!(split.parallels[0].name, "Refractor");
        assert_eq!(split.parallels[0].cards.len(), 2);
        assert_eq!(split.parallels[1].name, "Gold");
    }

    #[test]
    fn empty_input_groups_cleanly() {
        let split = split_parallels(&[]);
        assert!(split.base.is_empty());
        assert!(split.parallels.is_empty());

        assert_eq!(
            group_by_year(&[], &multi_year_set(), None).unwrap().len(),
            0
        );
    }
}
