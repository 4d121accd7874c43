// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Time supplier

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::Timestamp;

/// Helper trait for acquiring the current time from a custom clock.
pub trait TimeSupplier {
    /// Elapsed time since the UNIX epoch
    fn duration_since_epoch(&self) -> Duration;

    /// Convert the specified `Duration` to `Timestamp`
    ///
    /// Saturates at `i64::MAX` milliseconds.
    fn to_timestamp(&self, duration: Duration) -> Timestamp {
        let millis: i64 = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Timestamp::from_millis(millis)
    }
}

/// Wall clock backed by [`SystemTime`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl TimeSupplier for SystemClock {
    fn duration_since_epoch(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FarFuture;

    impl TimeSupplier for FarFuture {
        fn duration_since_epoch(&self) -> Duration {
            Duration::MAX
        }
    }

    #[test]
    fn test_to_timestamp_saturates() {
        assert_eq!(
            FarFuture.to_timestamp(FarFuture.duration_since_epoch()),
            Timestamp::max()
        );
    }

    #[test]
    fn test_to_timestamp_keeps_millis() {
        let duration = Duration::from_millis(1_602_838_800_123) + Duration::from_micros(999);
        assert_eq!(
            SystemClock.to_timestamp(duration),
            Timestamp::from_millis(1_602_838_800_123)
        );
    }

    #[test]
    fn test_system_clock_after_epoch() {
        assert!(SystemClock.duration_since_epoch() > Duration::ZERO);
    }
}
