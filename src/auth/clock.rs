//! UTC clock used for the `Timestamp` parameter of signed requests.
//!
//! Huobi rejects signed requests whose timestamp drifts too far from server
//! time, and the timestamp is part of the signed payload, so the exact
//! rendering matters: `YYYY-MM-DDTHH:mm:ss`, UTC, no fractional seconds and no
//! offset suffix.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::error::HuobiError;

/// Trait for providing the current time for signed requests.
///
/// Implement this to pin the clock in tests or to correct for a known skew
/// against the exchange.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now_utc(&self) -> OffsetDateTime;
}

/// A clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    /// Create a clock pinned to `at`.
    pub fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }

    /// Create a clock pinned to a UNIX timestamp in seconds.
    pub fn from_unix_timestamp(secs: i64) -> Result<Self, HuobiError> {
        OffsetDateTime::from_unix_timestamp(secs)
            .map(Self)
            .map_err(|e| HuobiError::Configuration(format!("Invalid timestamp: {e}")))
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.0
    }
}

/// Render a time as a Huobi `Timestamp` value.
///
/// The value is converted to UTC first and truncated to whole seconds.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, HuobiError> {
    at.to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]"
        ))
        .map_err(|e| HuobiError::Signing(format!("Failed to format timestamp: {e}")))
}
