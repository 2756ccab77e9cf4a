use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::Instant;

/// Ticking time reference shared by the feed and its renderer.
///
/// The value only moves when [`Clock::tick`] runs, so elapsed times derived
/// from it change once per tick even when no request arrives.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    now: Instant,
    wall: DateTime<Local>,
}

impl Clock {
    pub fn new(now: Instant, wall: DateTime<Local>) -> Self {
        Self { now, wall }
    }

    pub fn tick(&mut self, now: Instant, wall: DateTime<Local>) {
        self.now = now;
        self.wall = wall;
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Local wall-clock time as of the last tick.
    pub fn wall(&self) -> DateTime<Local> {
        self.wall
    }

    /// Time since `created_at`, saturating at zero for timestamps after the last tick.
    pub fn elapsed(&self, created_at: Instant) -> Duration {
        self.now.saturating_duration_since(created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_follows_ticks() {
        let start = Instant::now();
        let mut clock = Clock::new(start, Local::now());
        let created = start;
        assert_eq!(clock.elapsed(created), Duration::ZERO);

        clock.tick(start + Duration::from_secs(1), Local::now());
        assert_eq!(clock.elapsed(created), Duration::from_secs(1));

        clock.tick(start + Duration::from_secs(75), Local::now());
        assert_eq!(clock.elapsed(created).as_secs(), 75);
    }

    #[test]
    fn test_elapsed_saturates() {
        let start = Instant::now();
        let clock = Clock::new(start, Local::now());
        assert_eq!(clock.elapsed(start + Duration::from_secs(3)), Duration::ZERO);
    }

    #[test]
    fn test_wall_updates_on_tick() {
        let start = Instant::now();
        let first = Local::now();
        let mut clock = Clock::new(start, first);
        let later = first + chrono::Duration::seconds(5);
        clock.tick(start + Duration::from_secs(5), later);
        assert_eq!(clock.wall(), later);
        assert_eq!(clock.now(), start + Duration::from_secs(5));
    }
}
