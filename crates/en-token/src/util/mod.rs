// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Util

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Text returned by the infallible encoders when serialization fails
pub const EMPTY_JSON_OBJECT: &str = "{}";

/// JSON util
pub trait JsonUtil: Sized + Serialize + DeserializeOwned
where
    <Self as JsonUtil>::Err: From<serde_json::Error>,
{
    /// Error
    type Err: Debug + Display;

    /// Deserialize JSON
    #[inline]
    fn from_json<T>(json: T) -> Result<Self, Self::Err>
    where
        T: AsRef<[u8]>,
    {
        Ok(serde_json::from_slice(json.as_ref())?)
    }

    /// Serialize as JSON string
    ///
    /// Never panics: on failure the error is logged and an empty JSON object is returned.
    /// Use `try_as_json` for error propagation.
    fn as_json(&self) -> String {
        match self.try_as_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize as JSON.");
                String::from(EMPTY_JSON_OBJECT)
            }
        }
    }

    /// Serialize as JSON string
    #[inline]
    fn try_as_json(&self) -> Result<String, Self::Err> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as pretty JSON string
    ///
    /// Never panics: on failure the error is logged and an empty JSON object is returned.
    /// Use `try_as_pretty_json` for error propagation.
    fn as_pretty_json(&self) -> String {
        match self.try_as_pretty_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize as pretty JSON.");
                String::from(EMPTY_JSON_OBJECT)
            }
        }
    }

    /// Serialize as pretty JSON string
    #[inline]
    fn try_as_pretty_json(&self) -> Result<String, Self::Err> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
