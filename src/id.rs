//! Bit layout of a CyberFlake identifier
//!
//! ```text
//!  63  62                           22 21     17 16     12 11          0
//! +---+-------------------------------+---------+---------+-------------+
//! | 0 |  timestamp offset (41 bits)   | node(5) | proc(5) | sequence(12)|
//! +---+-------------------------------+---------+---------+-------------+
//! ```
//!
//! Packing never writes the process field; it always decodes as zero for
//! identifiers produced by this crate.

use std::fmt;
use std::str::FromStr;

use crate::error::CyberFlakeError;

/// A packed 64-bit CyberFlake, exchanged externally as a decimal string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CyberFlakeId(u64);

impl CyberFlakeId {
    pub const TIMESTAMP_BITS: u32 = 41;
    pub const NODE_BITS: u32 = 5;
    pub const PROCESS_BITS: u32 = 5;
    pub const SEQUENCE_BITS: u32 = 12;

    pub const PROCESS_SHIFT: u32 = Self::SEQUENCE_BITS;
    pub const NODE_SHIFT: u32 = Self::PROCESS_SHIFT + Self::PROCESS_BITS;
    pub const TIMESTAMP_SHIFT: u32 = Self::NODE_SHIFT + Self::NODE_BITS;

    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const NODE_MASK: u64 = (1 << Self::NODE_BITS) - 1;
    pub const PROCESS_MASK: u64 = (1 << Self::PROCESS_BITS) - 1;
    pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Width of the rendering returned by [`CyberFlakeId::to_binary`]
    pub const BINARY_LEN: usize = 64;

    /// Pack a timestamp offset, node ID and sequence into an identifier.
    /// Each field is masked to its width.
    #[inline(always)]
    pub const fn pack(offset: u64, node_id: u8, sequence: u16) -> Self {
        Self(
            ((offset & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT)
                | ((node_id as u64 & Self::NODE_MASK) << Self::NODE_SHIFT)
                | (sequence as u64 & Self::SEQUENCE_MASK),
        )
    }

    #[inline(always)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn to_raw(self) -> u64 {
        self.0
    }

    /// Milliseconds since the generator epoch.
    ///
    /// Not masked: an externally supplied value with bit 63 set decodes to a
    /// 42-bit offset rather than being silently truncated.
    #[inline(always)]
    pub const fn timestamp_offset(self) -> u64 {
        self.0 >> Self::TIMESTAMP_SHIFT
    }

    #[inline(always)]
    pub const fn node_id(self) -> u8 {
        ((self.0 >> Self::NODE_SHIFT) & Self::NODE_MASK) as u8
    }

    #[inline(always)]
    pub const fn process_id(self) -> u8 {
        ((self.0 >> Self::PROCESS_SHIFT) & Self::PROCESS_MASK) as u8
    }

    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        (self.0 & Self::SEQUENCE_MASK) as u16
    }

    /// Zero-padded base-2 rendering, always 64 characters
    pub fn to_binary(self) -> String {
        format!("{:064b}", self.0)
    }
}

impl fmt::Display for CyberFlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CyberFlakeId {
    type Err = CyberFlakeError;

    /// Parse a decimal identifier, ignoring surrounding ASCII whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_ascii()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CyberFlakeError::invalid_identifier(s))
    }
}

impl TryFrom<&str> for CyberFlakeId {
    type Error = CyberFlakeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<u64> for CyberFlakeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<CyberFlakeId> for u64 {
    fn from(id: CyberFlakeId) -> Self {
        id.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::CyberFlakeId;

    impl Serialize for CyberFlakeId {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = CyberFlakeId;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal string or non-negative integer")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(CyberFlakeId(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u64::try_from(v)
                .map(CyberFlakeId)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for CyberFlakeId {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_any(IdVisitor)
        }
    }
}
