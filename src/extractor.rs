use chrono::{DateTime, Utc};

use crate::config::CyberFlakeConfig;
use crate::error::Result;
use crate::id::CyberFlakeId;

/// Fields recovered from a CyberFlake
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Deconstructed {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub node_id: u8,
    /// Always zero for identifiers produced by this crate
    pub process_id: u8,
    pub sequence: u16,
    /// Zero-padded base-2 rendering of the full 64-bit value
    pub binary: String,
}

impl Deconstructed {
    /// Calendar representation of `timestamp`, derived on each call
    pub fn date(&self) -> DateTime<Utc> {
        // Offsets are at most 42 bits and the epoch is capped at year 9999,
        // so the conversion cannot fall outside chrono's range.
        DateTime::<Utc>::from_timestamp_millis(self.timestamp as i64).unwrap_or_default()
    }
}

/// CyberFlake component extractor
#[derive(Debug, Copy, Clone, Default)]
pub struct CyberFlakeExtractor {
    config: CyberFlakeConfig,
}

impl CyberFlakeExtractor {
    /// Create a new extractor with the given configuration
    pub(crate) fn new(config: CyberFlakeConfig) -> Self {
        Self { config }
    }

    /// Epoch this extractor adds back to decoded offsets
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.config.epoch()
    }

    /// Unix-epoch milliseconds encoded in an already parsed identifier
    #[inline(always)]
    pub const fn unix_millis(&self, id: CyberFlakeId) -> u64 {
        id.timestamp_offset() + self.config.epoch()
    }

    /// Decompose a parsed identifier into its fields
    pub fn decompose(&self, id: CyberFlakeId) -> Deconstructed {
        Deconstructed {
            timestamp: self.unix_millis(id),
            node_id: id.node_id(),
            process_id: id.process_id(),
            sequence: id.sequence(),
            binary: id.to_binary(),
        }
    }

    /// Parse a decimal identifier and decompose it
    pub fn deconstruct(&self, id: &str) -> Result<Deconstructed> {
        Ok(self.decompose(id.parse()?))
    }

    /// Unix-epoch milliseconds encoded in a decimal identifier
    pub fn timestamp(&self, id: &str) -> Result<u64> {
        Ok(self.unix_millis(id.parse()?))
    }

    /// Absolute distance in milliseconds between the creation times of two identifiers
    pub fn duration(&self, a: &str, b: &str) -> Result<u64> {
        Ok(self.timestamp(a)?.abs_diff(self.timestamp(b)?))
    }
}
