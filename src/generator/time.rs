//! Clock adapter for CyberFlake generation
//!
//! Resolves "now" or a caller-supplied instant to a millisecond offset from
//! the generator epoch.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{CyberFlakeError, Result};
use crate::id::CyberFlakeId;

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// Generators read "now" through this trait, so tests can freeze or step the
/// clock.
pub trait TimeSource {
    fn current_millis(&self) -> i64;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

/// The instant an identifier is generated for
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Timestamp {
    /// Read the generator's time source
    #[default]
    Now,
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// Fractional milliseconds since the Unix epoch, floored
    Fractional(f64),
    DateTime(DateTime<Utc>),
    /// Decimal milliseconds or an RFC 3339 date/time
    Text(String),
}

impl Timestamp {
    /// Milliseconds since the Unix epoch this instant denotes
    pub fn unix_millis<C: TimeSource + ?Sized>(&self, clock: &C) -> Result<i64> {
        match self {
            Timestamp::Now => Ok(clock.current_millis()),
            Timestamp::Millis(ms) => Ok(*ms),
            Timestamp::Fractional(ms) => fractional_millis(*ms),
            Timestamp::DateTime(dt) => Ok(dt.timestamp_millis()),
            Timestamp::Text(text) => parse_text(text),
        }
    }
}

fn fractional_millis(ms: f64) -> Result<i64> {
    if !ms.is_finite() {
        return Err(CyberFlakeError::invalid_timestamp(ms, "not a finite number"));
    }
    let floored = ms.floor();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return Err(CyberFlakeError::invalid_timestamp(
            ms,
            "outside the millisecond range",
        ));
    }
    Ok(floored as i64)
}

fn parse_text(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if let Ok(ms) = trimmed.parse::<i64>() {
        return Ok(ms);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| {
            CyberFlakeError::invalid_timestamp(text, "not a date/time or millisecond count")
        })
}

/// Resolve an instant to its offset from `epoch`, checking it fits the timestamp field
pub(crate) fn resolve_offset<C: TimeSource + ?Sized>(
    timestamp: &Timestamp,
    clock: &C,
    epoch: u64,
) -> Result<u64> {
    let unix_ms = timestamp.unix_millis(clock)?;
    offset_from_epoch(unix_ms, epoch)
}

pub(crate) fn offset_from_epoch(unix_ms: i64, epoch: u64) -> Result<u64> {
    let offset = i128::from(unix_ms) - i128::from(epoch);
    if offset < 0 {
        return Err(CyberFlakeError::invalid_timestamp(
            unix_ms,
            "before the generator epoch",
        ));
    }
    if offset > i128::from(CyberFlakeId::TIMESTAMP_MASK) {
        return Err(CyberFlakeError::invalid_timestamp(
            unix_ms,
            "past the end of the 41-bit timestamp range",
        ));
    }
    Ok(offset as u64)
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Timestamp::Millis(ms)
    }
}

impl From<u64> for Timestamp {
    fn from(ms: u64) -> Self {
        // anything above i64::MAX is far past the timestamp range anyway
        Timestamp::Millis(i64::try_from(ms).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Timestamp {
    fn from(ms: f64) -> Self {
        Timestamp::Fractional(ms)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp::DateTime(dt.with_timezone(&Utc))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        Timestamp::DateTime(DateTime::<Utc>::from(t))
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(text.to_owned())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Timestamp::Text(text)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Now => f.write_str("now"),
            Timestamp::Millis(ms) => write!(f, "{ms}"),
            Timestamp::Fractional(ms) => write!(f, "{ms}"),
            Timestamp::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Text(text) => f.write_str(text),
        }
    }
}
