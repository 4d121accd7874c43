// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Prelude

#![allow(unknown_lints)]
#![allow(ambiguous_glob_reexports)]

// Internal modules
pub use crate::token::*;
pub use crate::types::*;
pub use crate::util::*;
pub use crate::Result;
