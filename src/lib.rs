//! # CyberFlake
//!
//! Snowflake-style 64-bit identifiers, exchanged as decimal strings.
//!
//! | bits   | field            |
//! |--------|------------------|
//! | 22..63 | ms since epoch   |
//! | 17..22 | node id          |
//! | 12..17 | process id (0)   |
//! | 0..12  | sequence         |
//!
//! ```
//! let id = cyberflake::generate().unwrap();
//! let parts = cyberflake::deconstruct(&id).unwrap();
//! assert_eq!(parts.node_id, 1);
//! assert_eq!(parts.process_id, 0);
//! assert!(parts.timestamp >= cyberflake::epoch());
//! ```
//!
//! The sequence wraps to zero after 4096 ids without waiting for the clock,
//! so callers needing strict uniqueness must stay under 4096 ids per
//! millisecond per generator.

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
mod id;

#[cfg(test)]
pub mod tests;

use once_cell::sync::Lazy;

// Re-export main types
pub use config::{
    CyberFlakeConfig, CyberFlakeConfigBuilder, CyberFlakeConfigError, DEFAULT_EPOCH,
    DEFAULT_NODE_ID, MAX_EPOCH,
};
pub use error::{CyberFlakeError, Result};
pub use extractor::{CyberFlakeExtractor, Deconstructed};
pub use generator::{CyberFlake, SequenceCounter, SystemClock, TimeSource, Timestamp};
pub use id::CyberFlakeId;

/// Process-wide generator backing the free functions below
static DEFAULT_GENERATOR: Lazy<CyberFlake> = Lazy::new(CyberFlake::new);

/// The generator shared by [`generate`] and [`generate_at`]
pub fn default_generator() -> &'static CyberFlake {
    &DEFAULT_GENERATOR
}

/// Generate a CyberFlake for the current instant
pub fn generate() -> Result<String> {
    DEFAULT_GENERATOR.generate()
}

/// Generate a CyberFlake for the given instant
pub fn generate_at(timestamp: impl Into<Timestamp>) -> Result<String> {
    DEFAULT_GENERATOR.generate_at(timestamp)
}

/// Decompose a decimal CyberFlake into its fields
pub fn deconstruct(id: &str) -> Result<Deconstructed> {
    CyberFlakeExtractor::default().deconstruct(id)
}

/// Unix-epoch milliseconds at which the CyberFlake was generated
pub fn get_timestamp(id: &str) -> Result<u64> {
    CyberFlakeExtractor::default().timestamp(id)
}

/// Absolute difference in milliseconds between the timestamps of two CyberFlakes
pub fn calculate_duration(a: &str, b: &str) -> Result<u64> {
    CyberFlakeExtractor::default().duration(a, b)
}

/// The fixed epoch, in milliseconds since the Unix epoch
pub const fn epoch() -> u64 {
    DEFAULT_EPOCH
}
