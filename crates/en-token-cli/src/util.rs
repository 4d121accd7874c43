// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

use en_token::prelude::*;
use prettytable::{row, Table};

pub fn format_entity(entity: &TokenEntity, pretty: bool) -> String {
    if pretty {
        entity.as_pretty_json()
    } else {
        entity.as_json()
    }
}

pub fn entity_table(entity: &TokenEntity) -> Table {
    let mut table: Table = Table::new();

    table.set_titles(row!["Token", "Last Updated (ms)", "Last Updated", "Responded"]);
    table.add_row(row![
        entity.token(),
        entity.last_updated_timestamp_ms(),
        entity.last_updated().to_human_datetime(),
        entity.is_responded()
    ]);

    table
}
