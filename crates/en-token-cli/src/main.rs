// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

use std::io::{self, Read};
use std::process;

use clap::Parser;
use en_token::prelude::*;

mod cli;
mod util;

use self::cli::{io as cli_io, Cli, Command};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let output: String = handle_command(args.command, args.pretty, io::stdin())?;
    println!("{output}");

    Ok(())
}

fn handle_command<R>(command: Command, pretty: bool, stdin: R) -> Result<String>
where
    R: Read,
{
    match command {
        Command::Create {
            token,
            responded,
            at,
        } => {
            let mut entity = TokenEntity::create(token, responded)?;

            if let Some(at) = at {
                entity.set_last_updated(at);
            }

            tracing::info!(token = %entity.token(), "Token record created.");

            Ok(util::format_entity(&entity, pretty))
        }
        Command::Inspect { json } => {
            let entity = decode(json, stdin)?;
            Ok(util::entity_table(&entity).to_string())
        }
        Command::Respond { json, no } => {
            let mut entity = decode(json, stdin)?;
            entity.set_responded(!no);
            Ok(util::format_entity(&entity, pretty))
        }
        Command::Touch { json, at } => {
            let mut entity = decode(json, stdin)?;
            entity.set_last_updated(at.unwrap_or_else(Timestamp::now));
            tracing::debug!(
                token = %entity.token(),
                timestamp = %entity.last_updated(),
                "Token record touched."
            );
            Ok(util::format_entity(&entity, pretty))
        }
    }
}

fn decode<R>(json: Option<String>, stdin: R) -> Result<TokenEntity>
where
    R: Read,
{
    let json: String = cli_io::get_json_input(json, stdin)?;
    match TokenEntity::from_json(json.trim()) {
        Ok(entity) => Ok(entity),
        Err(e) => {
            tracing::debug!(error = %e, "Invalid token record.");
            Err(e.into())
        }
    }
}
