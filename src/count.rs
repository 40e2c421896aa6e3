//! Tally of validated albums.
//!
//! The process-wide tally is bumped by [`Album::new`](crate::Album::new). It
//! starts at zero, is only reachable through the free functions below and is
//! never reset. Separate [`AlbumCounter`]s can be created for isolated tallies
//! via [`Album::with_counter`](crate::Album::with_counter).

use std::sync::atomic::{AtomicI64, Ordering};

use log::trace;

/// Process-wide album tally.
pub(crate) static ALBUM_COUNT: AlbumCounter = AlbumCounter::new();

/// Atomic signed counter. Increments may be negative and are not bounds checked.
#[derive(Debug, Default)]
pub struct AlbumCounter {
    count: AtomicI64,
}

impl AlbumCounter {
    pub const fn new() -> Self {
        AlbumCounter {
            count: AtomicI64::new(0),
        }
    }

    pub fn get(&self) -> i64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Adds 1 and returns the new value.
    pub fn increment(&self) -> i64 {
        self.increase_by(1)
    }

    /// Adds `increment` and returns the new value. Wraps on overflow.
    pub fn increase_by(&self, increment: i64) -> i64 {
        let count = self
            .count
            .fetch_add(increment, Ordering::Relaxed)
            .wrapping_add(increment);
        trace!("Album count increased by {} to {}", increment, count);
        count
    }
}

/// Current value of the process-wide tally.
pub fn album_count() -> i64 {
    ALBUM_COUNT.get()
}

/// Adds 1 to the process-wide tally and returns the new value.
pub fn increase_album_count() -> i64 {
    ALBUM_COUNT.increment()
}

/// Adds `increment` to the process-wide tally and returns the new value.
pub fn increase_album_count_by(increment: i64) -> i64 {
    ALBUM_COUNT.increase_by(increment)
}
