// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

use std::io::Read;

use en_token::Result;

/// Use the argument as JSON input, or read it from `reader` when missing or `-`
pub fn get_json_input<R>(arg: Option<String>, mut reader: R) -> Result<String>
where
    R: Read,
{
    match arg {
        Some(json) if json != "-" => Ok(json),
        _ => {
            let mut json = String::new();
            reader.read_to_string(&mut json)?;
            Ok(json)
        }
    }
}
