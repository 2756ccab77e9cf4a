//! Synchronous feed state machine.
//!
//! `FeedState` owns every piece of mutable feed state and exposes one method
//! per timer boundary. It never reads the time itself; callers pass `now`,
//! which keeps it deterministic under test. `runtime::FeedRuntime` drives it
//! from a single task.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::freshness::FreshnessTracker;
use crate::generator::RequestGenerator;
use crate::history::HistoryBuffer;
use crate::metrics::aggregate;
use crate::models::Request;
use crate::random::RandomSource;
use crate::rate::RateMeter;
use crate::snapshot::Snapshot;

pub struct FeedState {
    config: FeedConfig,
    rng: Box<dyn RandomSource>,
    generator: RequestGenerator,
    history: HistoryBuffer,
    freshness: FreshnessTracker,
    rate: RateMeter,
    clock: Clock,
    next_id: u64,
    total: u64,
    running: bool,
    stopped: bool,
}

impl FeedState {
    /// Build a feed whose history is pre-seeded with back-dated requests.
    ///
    /// Seeds get ids `1..=seed_size`, are spaced `seed_spacing` apart ending
    /// one spacing before `now`, and are neither fresh nor counted by the
    /// rate meter.
    pub fn new(
        config: FeedConfig,
        rng: impl RandomSource,
        now: Instant,
        wall: DateTime<Local>,
    ) -> Result<Self, FeedError> {
        config.validate()?;

        let mut state = Self {
            generator: RequestGenerator::new(config.min_score, config.max_score),
            history: HistoryBuffer::new(config.capacity),
            freshness: FreshnessTracker::new(config.freshness_window),
            rate: RateMeter::new(config.rate_window),
            clock: Clock::new(now, wall),
            rng: Box::new(rng),
            next_id: 1,
            total: 0,
            running: false,
            stopped: false,
            config,
        };
        state.seed(now);
        Ok(state)
    }

    fn seed(&mut self, now: Instant) {
        let seed_size = self.config.seed_size;
        for i in 0..seed_size {
            let age = self.config.seed_spacing * (seed_size - i) as u32;
            let created_at = now.checked_sub(age).unwrap_or(now);
            let request = self.next_request(created_at);
            self.history.push(request);
        }
    }

    fn next_request(&mut self, created_at: Instant) -> Request {
        let id = self.next_id;
        self.next_id += 1;
        self.total += 1;
        self.generator.generate(id, created_at, self.rng.as_mut())
    }

    /// Randomized wait before the next arrival, uniform over the configured range.
    pub fn next_delay(&mut self) -> Duration {
        let min = self.config.min_delay.as_millis() as u64;
        let max = self.config.max_delay.as_millis() as u64;
        Duration::from_millis(self.rng.between(min, max))
    }

    /// Generate one request and push it through history, freshness and rate.
    ///
    /// Returns `None` without touching any state once the feed is stopped.
    pub fn fire(&mut self, now: Instant) -> Option<Request> {
        if self.stopped {
            return None;
        }
        let request = self.next_request(now);
        self.history.push(request.clone());
        self.freshness.mark_fresh(request.id, now);
        self.rate.record_arrival(now);
        debug!(
            id = request.id,
            category = %request.category,
            location = request.location_label(),
            score = request.score,
            "request arrived"
        );
        Some(request)
    }

    pub fn expire_fresh(&mut self, now: Instant) {
        let expired = self.freshness.expire(now);
        if expired > 0 {
            trace!(expired, remaining = self.freshness.len(), "freshness expired");
        }
    }

    pub fn next_fresh_expiry(&self) -> Option<Instant> {
        self.freshness.next_expiry()
    }

    pub fn recompute_rate(&mut self, now: Instant) {
        let rate = self.rate.recompute(now);
        trace!(rate, retained = self.rate.retained(), "rate recomputed");
    }

    pub fn tick_clock(&mut self, now: Instant, wall: DateTime<Local>) {
        self.clock.tick(now, wall);
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Permanently stop generation. Further `fire` calls are no-ops.
    pub fn halt(&mut self) {
        self.stopped = true;
        self.running = false;
    }

    pub fn is_halted(&self) -> bool {
        self.stopped
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        let metrics = aggregate(self.history.iter());
        debug_assert!(
            metrics.average_score.is_some(),
            "history is seeded and never drained"
        );

        Snapshot {
            requests: self.history.snapshot(),
            fresh_ids: self.freshness.fresh_ids(),
            rate: self.rate.current_rate(),
            category_counts: metrics.category_counts,
            average_score: metrics.average_score.unwrap_or(0),
            total: self.total,
            running: self.running,
            now: self.clock.now(),
            wall_clock: self.clock.wall(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::testing::SequenceRandom;
    use pretty_assertions::assert_eq;

    const SEED_SCORES: [u64; 9] = [70, 75, 80, 85, 90, 65, 72, 88, 95];

    fn state_with(rng: SequenceRandom) -> (FeedState, Instant) {
        let now = Instant::now();
        let state = FeedState::new(FeedConfig::default(), rng, now, Local::now()).unwrap();
        (state, now)
    }

    #[test]
    fn test_seed_history() {
        let (state, now) = state_with(SequenceRandom::new().with_ints(SEED_SCORES));
        let snapshot = state.snapshot();

        let ids: Vec<u64> = snapshot.requests.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(snapshot.total, 9);
        assert_eq!(snapshot.average_score, 80);
        assert!(snapshot.fresh_ids.is_empty());
        assert_eq!(snapshot.rate, 0.0);
        assert!(!snapshot.running);

        // Oldest seed is 9 spacings back, newest one spacing back
        assert_eq!(snapshot.elapsed(&snapshot.requests[8]), Duration::from_secs(126));
        assert_eq!(snapshot.elapsed(&snapshot.requests[0]), Duration::from_secs(14));
        assert_eq!(snapshot.now, now);
    }

    #[test]
    fn test_seed_category_counts() {
        // Each seed draws category then neighborhood, plus a venue for Map
        let picks = [
            0, 0, // Top20
            1, 0, 3, // Map + venue
            2, 0, // Exposed
            3, 0, // Analysis
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        let (state, _) = state_with(SequenceRandom::new().with_picks(picks));
        let snapshot = state.snapshot();

        assert_eq!(snapshot.count(Category::Top20), 6);
        assert_eq!(snapshot.count(Category::Map), 1);
        assert_eq!(snapshot.count(Category::Exposed), 1);
        assert_eq!(snapshot.count(Category::Analysis), 1);
        let map_request = snapshot
            .requests
            .iter()
            .find(|r| r.category == Category::Map)
            .unwrap();
        assert_eq!(map_request.venue, Some("Brasserie Lipp"));
    }

    #[test]
    fn test_fire_feeds_every_component() {
        let (mut state, now) = state_with(SequenceRandom::new());
        let at = now + Duration::from_secs(2);
        let request = state.fire(at).unwrap();

        assert_eq!(request.id, 10);
        assert_eq!(request.created_at, at);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.requests[0].id, 10);
        assert_eq!(snapshot.total, 10);
        assert!(snapshot.is_fresh(10));

        state.recompute_rate(at + Duration::from_secs(1));
        // One arrival over a 60s window rounds to 0.0
        assert_eq!(state.snapshot().rate, 0.0);

        state.expire_fresh(at + Duration::from_millis(2200));
        assert!(!state.snapshot().is_fresh(10));
    }

    #[test]
    fn test_ids_keep_increasing_past_capacity() {
        let (mut state, now) = state_with(SequenceRandom::new());
        for i in 0..100u64 {
            state.fire(now + Duration::from_millis(i * 10));
        }
        let snapshot = state.snapshot();
        assert_eq!(snapshot.active(), 50);
        assert_eq!(snapshot.total, 109);
        assert_eq!(snapshot.requests[0].id, 109);
        assert_eq!(snapshot.requests[49].id, 60);
    }

    #[test]
    fn test_halt_blocks_fire() {
        let (mut state, now) = state_with(SequenceRandom::new());
        state.halt();
        assert!(state.fire(now).is_none());
        assert_eq!(state.snapshot().total, 9);
        assert!(state.is_halted());
    }

    #[test]
    fn test_next_delay_uses_configured_range() {
        let (mut state, _) = state_with(SequenceRandom::new().with_ints([
            70, 75, 80, 85, 90, 65, 72, 88, 95, // seed scores
            2000, 100, 9000,
        ]));
        assert_eq!(state.next_delay(), Duration::from_millis(2000));
        assert_eq!(state.next_delay(), Duration::from_millis(1800));
        assert_eq!(state.next_delay(), Duration::from_millis(5000));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = FeedConfig {
            capacity: 0,
            ..FeedConfig::default()
        };
        let result = FeedState::new(config, SequenceRandom::new(), Instant::now(), Local::now());
        assert!(matches!(result, Err(FeedError::InvalidConfig(_))));
    }
}
