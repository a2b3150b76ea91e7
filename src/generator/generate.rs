//! ID generation logic

use crate::error::Result;
use crate::id::CyberFlakeId;

use super::time::{resolve_offset, TimeSource, Timestamp};
use super::CyberFlake;

impl<C: TimeSource> CyberFlake<C> {
    /// Generate a CyberFlake for the current instant, as a decimal string
    pub fn generate(&self) -> Result<String> {
        self.generate_at(Timestamp::Now)
    }

    /// Generate a CyberFlake for the given instant, as a decimal string
    pub fn generate_at(&self, timestamp: impl Into<Timestamp>) -> Result<String> {
        self.generate_id_at(timestamp).map(|id| id.to_string())
    }

    /// Generate a typed CyberFlake for the current instant
    pub fn generate_id(&self) -> Result<CyberFlakeId> {
        self.generate_id_at(Timestamp::Now)
    }

    /// Generate a typed CyberFlake for the given instant.
    ///
    /// The timestamp is validated before the sequence is consumed, so a
    /// rejected instant leaves the counter untouched.
    pub fn generate_id_at(&self, timestamp: impl Into<Timestamp>) -> Result<CyberFlakeId> {
        let offset = resolve_offset(&timestamp.into(), &self.clock, self.config.epoch())?;
        let sequence = self.sequence.next();
        let id = CyberFlakeId::pack(offset, self.config.node_id(), sequence);
        tracing::trace!(%id, offset, sequence, "generated cyberflake");
        Ok(id)
    }
}
