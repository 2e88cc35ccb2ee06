//! Builders shared by this crate's unit tests.

use cardstock_model::{CardRecord, CardStatus};

pub fn card(number: &str, player: &str, status: CardStatus) -> CardRecord {
    CardRecord {
        id: format!("id-{number}"),
        set_id: "set-1".to_string(),
        card_number: number.to_string(),
        player_name: player.to_string(),
        team: None,
        subset_name: None,
        year: None,
        parallel: None,
        parallel_print_run: None,
        serial_owned: None,
        status,
        display_order: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

pub fn card_with(
    number: &str,
    player: &str,
    year: Option<i32>,
    parallel: Option<&str>,
) -> CardRecord {
    CardRecord {
        year,
        parallel: parallel.map(Into::into),
        ..card(number, player, CardStatus::Need)
    }
}
