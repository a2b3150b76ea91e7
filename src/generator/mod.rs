//! Core CyberFlake generator implementation
//!
//! Split into modules for testability:
//! - `time` - Clock adapter (time sources and instant resolution)
//! - `sequence` - Wrapping 12-bit sequence counter
//! - `generate` - ID generation logic

mod generate;
mod sequence;
mod time;

use crate::config::CyberFlakeConfig;
use crate::extractor::CyberFlakeExtractor;

pub use sequence::SequenceCounter;
pub use time::{SystemClock, TimeSource, Timestamp};

/// CyberFlake generator handle.
///
/// Owns the sequence counter; construct once and share by reference or `Arc`.
/// The counter wraps after 4096 ids without advancing the clock, so bursts
/// larger than that within one millisecond produce duplicates.
#[derive(Debug)]
pub struct CyberFlake<C = SystemClock> {
    sequence: SequenceCounter,
    clock: C,

    pub config: CyberFlakeConfig,
    pub extract: CyberFlakeExtractor,
}

impl CyberFlake<SystemClock> {
    /// Create with default configuration
    pub fn new() -> Self {
        Self::with_config(CyberFlakeConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: CyberFlakeConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: TimeSource> CyberFlake<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(config: CyberFlakeConfig, clock: C) -> Self {
        Self {
            sequence: SequenceCounter::new(),
            clock,
            config,
            extract: CyberFlakeExtractor::new(config),
        }
    }

    pub fn sequence(&self) -> &SequenceCounter {
        &self.sequence
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl Default for CyberFlake<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}
