// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]
#![doc = include_str!("../README.md")]

pub use serde_json;

pub mod prelude;
pub mod token;
pub mod types;
pub mod util;

pub use self::token::TokenEntity;
pub use self::types::{SystemClock, TimeSupplier, Timestamp};
pub use self::util::JsonUtil;

/// Result
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
