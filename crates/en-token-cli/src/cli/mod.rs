// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

use clap::{Parser, Subcommand};
use en_token::Timestamp;
use tracing::Level;

pub mod io;

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Max log level written to stderr
    #[clap(long, global = true, default_value_t = Level::WARN)]
    pub log_level: Level,
    /// Print JSON output pretty-printed
    #[clap(long, global = true)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create a new token record
    #[command(arg_required_else_help = true)]
    Create {
        /// Token identifier
        token: String,
        /// Mark the record as responded
        #[clap(long)]
        responded: bool,
        /// Creation time in milliseconds since UNIX epoch (default: now)
        #[clap(long, allow_hyphen_values = true)]
        at: Option<Timestamp>,
    },
    /// Decode a token record and print its fields
    Inspect {
        /// Token record JSON (`-` or omitted: read stdin)
        json: Option<String>,
    },
    /// Mark a token record as responded
    Respond {
        /// Token record JSON (`-` or omitted: read stdin)
        json: Option<String>,
        /// Mark as not responded instead
        #[clap(long)]
        no: bool,
    },
    /// Update the last updated timestamp of a token record
    Touch {
        /// Token record JSON (`-` or omitted: read stdin)
        json: Option<String>,
        /// New timestamp in milliseconds since UNIX epoch (default: now)
        #[clap(long, allow_hyphen_values = true)]
        at: Option<Timestamp>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from(["en-token", "create", "abc", "--responded", "--at", "-5"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Create {
                token: String::from("abc"),
                responded: true,
                at: Some(Timestamp::from_millis(-5)),
            }
        );
        assert_eq!(cli.log_level, Level::WARN);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["en-token", "inspect", "--pretty", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.command, Command::Inspect { json: None });
        assert_eq!(cli.log_level, Level::DEBUG);
        assert!(cli.pretty);
    }

    #[test]
    fn test_parse_respond_and_touch() {
        let cli = Cli::try_parse_from(["en-token", "respond", "-", "--no"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Respond {
                json: Some(String::from("-")),
                no: true,
            }
        );

        let cli = Cli::try_parse_from(["en-token", "touch", "--at", "1602838800000"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Touch {
                json: None,
                at: Some(Timestamp::from_millis(1_602_838_800_000)),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["en-token"]).is_err());
        assert!(Cli::try_parse_from(["en-token", "create"]).is_err());
        assert!(Cli::try_parse_from(["en-token", "touch", "--at", "soon"]).is_err());
        assert!(Cli::try_parse_from(["en-token", "inspect", "--log-level", "loud"]).is_err());
    }
}
