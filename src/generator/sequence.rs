//! Sequence counter shared by every generation call on a generator
//!
//! The counter wraps to zero after 4095 instead of waiting for the next
//! millisecond. More than 4096 identifiers requested within one millisecond
//! therefore repeat earlier identifiers.

use std::sync::atomic::{AtomicU16, Ordering};

use crate::id::CyberFlakeId;

/// Lock-free 12-bit counter, range [0, 4095]
#[derive(Debug, Default)]
pub struct SequenceCounter {
    value: AtomicU16,
}

impl SequenceCounter {
    pub const MAX: u16 = CyberFlakeId::SEQUENCE_MASK as u16;

    pub const fn new() -> Self {
        Self {
            value: AtomicU16::new(0),
        }
    }

    /// Return the current value and advance, wrapping 4095 back to 0.
    ///
    /// Read, increment and wrap happen in one CAS, so concurrent callers never
    /// observe the same value unless the counter has wrapped in between.
    #[inline]
    pub fn next(&self) -> u16 {
        let prev = self
            .value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| {
                Some(Self::successor(v))
            })
            .unwrap_or_else(|v| v);
        if prev == Self::MAX {
            tracing::debug!("sequence counter wrapped to 0");
        }
        prev
    }

    /// Value the next call to [`SequenceCounter::next`] will return
    #[inline]
    pub fn current(&self) -> u16 {
        self.value.load(Ordering::Acquire)
    }

    #[inline(always)]
    const fn successor(v: u16) -> u16 {
        (v + 1) & Self::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero() {
        let counter = SequenceCounter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn test_wraps_after_max() {
        let counter = SequenceCounter::new();
        for expected in 0..=SequenceCounter::MAX {
            assert_eq!(counter.next(), expected);
        }
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.next(), 0);
    }

    #[test]
    fn test_successor() {
        assert_eq!(SequenceCounter::successor(0), 1);
        assert_eq!(SequenceCounter::successor(4094), 4095);
        assert_eq!(SequenceCounter::successor(4095), 0);
    }

    #[test]
    fn test_concurrent_values_are_distinct() {
        let counter = Arc::new(SequenceCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..512).map(|_| counter.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for h in handles {
            for v in h.join().unwrap() {
                assert!(seen.insert(v), "sequence value {v} handed out twice");
            }
        }
        assert_eq!(seen.len(), 4096);
        assert_eq!(counter.current(), 0);
    }
}
