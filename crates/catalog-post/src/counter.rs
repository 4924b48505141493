//! Process-wide post counter
//!
//! Counts every [`crate::Post`] constructed since process start. The count
//! starts at 0, is bumped exactly once per construction by
//! [`record_construction`], and can only be read from outside this crate.

use std::sync::atomic::{AtomicU64, Ordering};

static CONSTRUCTED: AtomicU64 = AtomicU64::new(0);

/// Bump the counter, returning the new total
pub(crate) fn record_construction() -> u64 {
    CONSTRUCTED.fetch_add(1, Ordering::Relaxed) + 1
}

/// Number of posts constructed so far in this process
#[inline]
#[must_use]
pub fn total_post_count() -> u64 {
    CONSTRUCTED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Other tests construct posts concurrently, so only monotonicity is
    // asserted here; exact deltas live in tests/post_counter.rs.
    #[test]
    fn record_construction_is_monotonic() {
        let before = total_post_count();
        let returned = record_construction();
        assert!(returned > before);
        assert!(total_post_count() >= returned);
    }
}
