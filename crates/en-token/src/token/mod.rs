// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Token entity
//!
//! A token used when calling `provideDiagnosisKeys` to identify a given call to the
//! exposure-notification API.
//!
//! Partners should implement a daily TTL/expiry for on-device storage of this data, and must
//! ensure compliance with all applicable laws and requirements with respect to encryption,
//! storage, and retention policies for end user data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod de;
pub mod error;

pub use self::error::Error;
use crate::{JsonUtil, TimeSupplier, Timestamp};

/// Token entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenEntity {
    #[serde(deserialize_with = "de::token")]
    token: String,
    #[serde(rename = "lastUpdatedTimestampMs", deserialize_with = "de::timestamp")]
    last_updated: Timestamp,
    #[serde(deserialize_with = "de::responded")]
    responded: bool,
}

impl TokenEntity {
    /// Create a new [`TokenEntity`] stamped with the current time
    ///
    /// * `token` - the token identifier
    /// * `responded` - whether the exposure notification API has responded for the given token
    ///
    /// Returns [`Error::InvalidArgument`] if `token` is empty.
    pub fn create<S>(token: S, responded: bool) -> Result<Self, Error>
    where
        S: Into<String>,
    {
        Self::new(token.into(), responded, Timestamp::now())
    }

    /// Create a new [`TokenEntity`] stamped with the time of a specified [`TimeSupplier`]
    pub fn create_with_supplier<S, T>(token: S, responded: bool, supplier: &T) -> Result<Self, Error>
    where
        S: Into<String>,
        T: TimeSupplier,
    {
        Self::new(token.into(), responded, Timestamp::now_with_supplier(supplier))
    }

    fn new(token: String, responded: bool, last_updated: Timestamp) -> Result<Self, Error> {
        if token.is_empty() {
            return Err(Error::InvalidArgument(String::from("token must not be empty")));
        }

        Ok(Self {
            token,
            last_updated,
            responded,
        })
    }

    /// Get token identifier
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace token identifier
    ///
    /// No validation is performed and the timestamp is left untouched.
    #[inline]
    pub fn set_token<S>(&mut self, token: S)
    where
        S: Into<String>,
    {
        self.token = token.into();
    }

    /// Get last updated timestamp (milliseconds since UNIX epoch)
    #[inline]
    pub fn last_updated_timestamp_ms(&self) -> i64 {
        self.last_updated.as_millis()
    }

    /// Replace last updated timestamp (milliseconds since UNIX epoch)
    #[inline]
    pub fn set_last_updated_timestamp_ms(&mut self, ms: i64) {
        self.last_updated = Timestamp::from_millis(ms);
    }

    /// Get last updated [`Timestamp`]
    #[inline]
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Replace last updated [`Timestamp`]
    #[inline]
    pub fn set_last_updated(&mut self, timestamp: Timestamp) {
        self.last_updated = timestamp;
    }

    /// Check if the exposure notification API has responded for this token
    #[inline]
    pub fn is_responded(&self) -> bool {
        self.responded
    }

    /// Set whether the exposure notification API has responded for this token
    #[inline]
    pub fn set_responded(&mut self, responded: bool) {
        self.responded = responded;
    }

    /// Overwrite all fields from a JSON object
    ///
    /// The whole document is decoded before any field is touched: on error the entity is
    /// left unchanged and the error is both logged and returned.
    pub fn update_from_json<T>(&mut self, json: T) -> Result<(), Error>
    where
        T: AsRef<[u8]>,
    {
        match Self::from_json(json) {
            Ok(decoded) => {
                self.token = decoded.token;
                self.last_updated = decoded.last_updated;
                self.responded = decoded.responded;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, token = %self.token, "Failed to update token from JSON.");
                Err(e)
            }
        }
    }
}

impl JsonUtil for TokenEntity {
    type Err = Error;

    /// Deserialize [`TokenEntity`] from a JSON object
    ///
    /// Any other JSON value (arrays included) is rejected.
    fn from_json<T>(json: T) -> Result<Self, Self::Err>
    where
        T: AsRef<[u8]>,
    {
        let value: Value = serde_json::from_slice(json.as_ref())?;
        match value {
            Value::Object(..) => Ok(serde_json::from_value(value)?),
            _ => Err(Error::Json(String::from("expected a JSON object"))),
        }
    }
}
