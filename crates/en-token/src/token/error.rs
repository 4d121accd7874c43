// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Token error

use std::fmt;

/// [`TokenEntity`](super::TokenEntity) error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument passed at construction
    InvalidArgument(String),
    /// Error serializing or deserializing JSON data
    Json(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "Invalid argument: {e}"),
            Self::Json(e) => write!(f, "Json: {e}"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
