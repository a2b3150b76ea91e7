//! Configuration for the CyberFlake generator

mod builder;

use thiserror::Error;

pub use builder::CyberFlakeConfigBuilder;
pub use builder::{DEFAULT_EPOCH, DEFAULT_NODE_ID, MAX_EPOCH};

use crate::id::CyberFlakeId;

/// Errors related to `CyberFlakeConfig` builder validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CyberFlakeConfigError {
    /// Node ID does not fit in the 5-bit node field
    #[error("Node ID {node_id} is invalid. Maximum allowed value is {max}")]
    InvalidNodeId { node_id: u8, max: u8 },
    /// Epoch lies past the last instant a calendar date can be derived for
    #[error("Epoch {epoch} is out of range. Maximum allowed value is {max}")]
    EpochOutOfRange { epoch: u64, max: u64 },
}

/// Configuration for the CyberFlake generator and extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyberFlakeConfig {
    node_id: u8,
    epoch: u64,
}

impl CyberFlakeConfig {
    pub(crate) const fn new(node_id: u8, epoch: u64) -> Self {
        Self { node_id, epoch }
    }

    /// Create a new configuration builder
    pub fn builder() -> CyberFlakeConfigBuilder {
        CyberFlakeConfigBuilder::new()
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u8 {
        self.node_id
    }

    /// Process ID field is reserved and never written by packing
    #[inline(always)]
    pub const fn process_id(&self) -> u8 {
        0
    }

    #[inline(always)]
    pub const fn max_node_id(&self) -> u8 {
        CyberFlakeId::NODE_MASK as u8
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u16 {
        CyberFlakeId::SEQUENCE_MASK as u16
    }

    /// Largest offset from the epoch the timestamp field can hold
    #[inline(always)]
    pub const fn max_offset(&self) -> u64 {
        CyberFlakeId::TIMESTAMP_MASK
    }
}

impl Default for CyberFlakeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_ID, DEFAULT_EPOCH)
    }
}
