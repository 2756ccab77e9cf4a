use std::collections::{BTreeSet, HashSet, VecDeque};
use std::time::Duration;

use tokio::time::Instant;

/// Tracks ids inside the "just arrived" window.
///
/// Every mark queues its own removal at `marked_at + window`. Removals are
/// independent of history eviction; an id whose request was already evicted
/// simply expires later with no effect on anything else.
#[derive(Debug, Clone)]
pub struct FreshnessTracker {
    window: Duration,
    fresh: HashSet<u64>,
    /// Pending removals, ordered by deadline
    expiries: VecDeque<(Instant, u64)>,
}

impl FreshnessTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            fresh: HashSet::new(),
            expiries: VecDeque::new(),
        }
    }

    pub fn mark_fresh(&mut self, id: u64, now: Instant) {
        let deadline = now + self.window;
        debug_assert!(
            self.expiries.back().map_or(true, |(last, _)| *last <= deadline),
            "freshness marks must arrive in time order"
        );
        self.fresh.insert(id);
        self.expiries.push_back((deadline, id));
    }

    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh.contains(&id)
    }

    /// Apply every removal whose deadline is at or before `now`.
    /// Returns the number of removals applied.
    pub fn expire(&mut self, now: Instant) -> usize {
        let mut expired = 0;
        while let Some(&(deadline, id)) = self.expiries.front() {
            if deadline > now {
                break;
            }
            self.expiries.pop_front();
            self.fresh.remove(&id);
            expired += 1;
        }
        expired
    }

    /// Deadline of the next pending removal.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.expiries.front().map(|(deadline, _)| *deadline)
    }

    pub fn fresh_ids(&self) -> BTreeSet<u64> {
        self.fresh.iter().copied().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.fresh.len()
    }
}
