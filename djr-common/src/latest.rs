//! Stale search suppression
//!
//! Search-as-you-type clients can have several responses in flight at once;
//! only the most recently issued query should ever be rendered. Each
//! invocation is tagged with a monotone sequence id captured at call time
//! and compared at resolution time. Staleness is handled by ignoring, not
//! aborting: in-flight calls are never cancelled.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotone sequence of search invocations.
///
/// No locking is needed: there is one logical writer (the latest call), and
/// readers only compare against the most recently issued id.
#[derive(Debug, Default)]
pub struct SearchSequence {
    latest: AtomicU64,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence id and make it the current one.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True if `id` is still the most recently issued id, i.e. the response
    /// it tags has not been superseded by a newer query.
    pub fn is_current(&self, id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn latest_id_is_current() {
        let sequence = SearchSequence::new();
        let id = sequence.begin();
        assert!(sequence.is_current(id));
    }

    #[test]
    fn superseded_id_is_stale() {
        let sequence = SearchSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let sequence = SearchSequence::new();
        let mut previous = 0;
        for _ in 0..100 {
            let id = sequence.begin();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn exactly_one_id_is_current_across_threads() {
        let sequence = Arc::new(SearchSequence::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sequence = Arc::clone(&sequence);
                std::thread::spawn(move || (0..100).map(|_| sequence.begin()).max().unwrap())
            })
            .collect();

        let ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let current: Vec<&u64> = ids.iter().filter(|id| sequence.is_current(**id)).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(*current[0], 800);
    }
}
