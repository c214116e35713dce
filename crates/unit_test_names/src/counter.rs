use std::sync::atomic::{AtomicU64, Ordering};

/// Somewhere to get ids from.
///
/// Each call should return a value never returned before in the same compilation unit.  Nothing checks that: a
/// source which repeats itself loses uniqueness silently, and the collision shows up later as a redeclaration (or as
/// [crate::Error::Collision] from a [crate::NameGenerator]).
pub trait CounterSource {
    fn next_id(&self) -> u64;
}

/// The default source: a monotonic atomic counter.
///
/// This can live in a static.  The proc macros keep one per rustc process, which is one per crate.
#[derive(Debug)]
pub struct SequenceCounter {
    next: AtomicU64,
}

impl SequenceCounter {
    pub const fn new(start: u64) -> SequenceCounter {
        SequenceCounter {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CounterSource for SequenceCounter {
    fn next_id(&self) -> u64 {
        // fetch_add hands each value out once at any ordering.
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// A source which always returns the same id.
///
/// With this, only the line keeps names apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCounter(pub u64);

impl CounterSource for FixedCounter {
    fn next_id(&self) -> u64 {
        self.0
    }
}

impl<F: Fn() -> u64> CounterSource for F {
    fn next_id(&self) -> u64 {
        self()
    }
}
