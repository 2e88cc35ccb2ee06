use cardstock_parse::parse_checklist_text;

#[test]
fn parses_the_standard_dash_format() {
    let parsed = parse_checklist_text(
        "577 Trevor Story - Boston Red Sox\n581 Andruw Monasterio - Milwaukee Brewers",
        None,
    );

    assert_eq!(parsed.len(), 2);
    assert!(parsed.iter().all(|c| c.is_valid()));

    assert_eq!(parsed[0].card_number, "577");
    assert_eq!(parsed[0].player_name, "Trevor Story");
    assert_eq!(parsed[0].team.as_deref(), Some("Boston Red Sox"));
    assert_eq!(parsed[0].line_number, 1);

    assert_eq!(parsed[1].card_number, "581");
    assert_eq!(parsed[1].player_name, "Andruw Monasterio");
    assert_eq!(parsed[1].team.as_deref(), Some("Milwaukee Brewers"));
    assert_eq!(parsed[1].line_number, 2);
}

#[test]
fn hyphenated_names_split_on_the_last_delimiter() {
    let parsed = parse_checklist_text("100 Pete Crow-Armstrong - Chicago Cubs", None);

    assert_eq!(parsed[0].player_name, "Pete Crow-Armstrong");
    assert_eq!(parsed[0].team.as_deref(), Some("Chicago Cubs"));
}

#[test]
fn falls_back_to_the_last_comma() {
    let parsed = parse_checklist_text("27 Mike Trout, Angels", None);

    assert_eq!(parsed[0].card_number, "27");
    assert_eq!(parsed[0].player_name, "Mike Trout");
    assert_eq!(parsed[0].team.as_deref(), Some("Angels"));
}

#[test]
fn no_delimiter_means_no_team() {
    let parsed = parse_checklist_text("42 Jackie Robinson", None);

    assert_eq!(parsed[0].player_name, "Jackie Robinson");
    assert_eq!(parsed[0].team, None);
    assert!(parsed[0].is_valid());
}

#[test]
fn a_lone_token_is_an_error_row() {
    let parsed = parse_checklist_text("577", None);

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].card_number, "577");
    assert_eq!(parsed[0].player_name, "");
    assert_eq!(parsed[0].error.as_deref(), Some("Could not parse player name"));
    assert!(!parsed[0].is_valid());
}

#[test]
fn blank_lines_are_skipped_and_numbering_stays_contiguous() {
    let parsed = parse_checklist_text("\n1 A Player\n\n   \n2 B Player\n", None);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].line_number, 1);
    assert_eq!(parsed[1].line_number, 2);
}

#[test]
fn default_year_is_attached_to_every_row() {
    let parsed = parse_checklist_text("1 A Player\n2 B Player", Some(2024));

    assert!(parsed.iter().all(|c| c.year == Some(2024)));
}

#[test]
fn accents_are_folded_for_matching() {
    let parsed = parse_checklist_text("11 José Ramírez - Guardians", None);

    assert_eq!(parsed[0].player_name, "Jose Ramirez");
    assert_eq!(parsed[0].team.as_deref(), Some("Guardians"));
}

#[test]
fn raw_line_preserves_the_pasted_text() {
    let parsed = parse_checklist_text("  577 Trevor Story - Boston Red Sox  ", None);

    assert_eq!(parsed[0].raw_line, "577 Trevor Story - Boston Red Sox");
}
