//! CyberFlakeConfig builder for constructing configuration

use super::{CyberFlakeConfig, CyberFlakeConfigError};
use crate::id::CyberFlakeId;

/// 2015-01-01T00:00:00.000Z in milliseconds since the Unix epoch
pub const DEFAULT_EPOCH: u64 = 1_420_070_400_000;

/// Node ID stamped into every identifier unless configured otherwise
pub const DEFAULT_NODE_ID: u8 = 1;

/// 9999-12-31T23:59:59.999Z, the latest epoch accepted by the builder
pub const MAX_EPOCH: u64 = 253_402_300_799_999;

/// Builder for CyberFlakeConfig
#[derive(Debug)]
pub struct CyberFlakeConfigBuilder {
    node_id: u8,
    epoch: u64,
}

impl CyberFlakeConfigBuilder {
    /// Create a new CyberFlakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            node_id: DEFAULT_NODE_ID,
            epoch: DEFAULT_EPOCH,
        }
    }

    /// Set the node ID (0-31)
    pub fn node_id(mut self, node_id: u8) -> Result<Self, CyberFlakeConfigError> {
        let max = CyberFlakeId::NODE_MASK as u8;
        if node_id > max {
            return Err(CyberFlakeConfigError::InvalidNodeId { node_id, max });
        }
        self.node_id = node_id;
        Ok(self)
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub fn epoch(mut self, epoch: u64) -> Result<Self, CyberFlakeConfigError> {
        if epoch > MAX_EPOCH {
            return Err(CyberFlakeConfigError::EpochOutOfRange {
                epoch,
                max: MAX_EPOCH,
            });
        }
        self.epoch = epoch;
        Ok(self)
    }

    /// Build the final CyberFlakeConfig
    pub fn build(self) -> CyberFlakeConfig {
        CyberFlakeConfig::new(self.node_id, self.epoch)
    }
}

impl Default for CyberFlakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
