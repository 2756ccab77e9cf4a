use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

/// Rolling arrivals-per-second over a trailing window.
///
/// Recording only appends; pruning and the published rate change only when
/// [`RateMeter::recompute`] runs, so the rate lags by up to one recompute
/// period.
#[derive(Debug, Clone)]
pub struct RateMeter {
    window: Duration,
    arrivals: VecDeque<Instant>,
    current: f64,
}

impl RateMeter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            arrivals: VecDeque::new(),
            current: 0.0,
        }
    }

    pub fn record_arrival(&mut self, at: Instant) {
        self.arrivals.push_back(at);
    }

    /// Drop arrivals at least one window old, then publish
    /// `retained / window_secs` rounded to one decimal.
    ///
    /// Rounding is `f64::round` on the tenths, so halves go away from zero:
    /// 9 arrivals over 60s publish 0.2 and 21 publish 0.4.
    pub fn recompute(&mut self, now: Instant) -> f64 {
        while let Some(&oldest) = self.arrivals.front() {
            if now.saturating_duration_since(oldest) < self.window {
                break;
            }
            self.arrivals.pop_front();
        }
        let per_second = self.arrivals.len() as f64 / self.window.as_secs_f64();
        self.current = (per_second * 10.0).round() / 10.0;
        self.current
    }

    pub fn current_rate(&self) -> f64 {
        self.current
    }

    /// Arrivals currently retained, including ones not yet pruned.
    pub fn retained(&self) -> usize {
        self.arrivals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn test_uniform_arrivals_over_window() {
        let start = Instant::now();
        let mut meter = RateMeter::new(WINDOW);
        for i in 0..120 {
            meter.record_arrival(start + Duration::from_millis(i * 500));
        }
        let rate = meter.recompute(start + WINDOW);
        assert_eq!(rate, 2.0);
        assert_eq!(meter.current_rate(), 2.0);
    }

    #[test]
    fn test_recording_does_not_publish() {
        let start = Instant::now();
        let mut meter = RateMeter::new(WINDOW);
        meter.record_arrival(start);
        meter.record_arrival(start);
        assert_eq!(meter.current_rate(), 0.0);
        assert_eq!(meter.recompute(start), 0.0);
    }

    #[test]
    fn test_prunes_arrivals_outside_window() {
        let start = Instant::now();
        let mut meter = RateMeter::new(WINDOW);
        for i in 0..30 {
            meter.record_arrival(start + Duration::from_secs(i));
        }
        assert_eq!(meter.recompute(start + Duration::from_secs(29)), 0.5);

        // Arrivals at 0..=9 are now a full window old
        meter.recompute(start + Duration::from_secs(69));
        assert_eq!(meter.retained(), 20);
        assert_eq!(meter.current_rate(), 0.3);

        meter.recompute(start + Duration::from_secs(200));
        assert_eq!(meter.retained(), 0);
        assert_eq!(meter.current_rate(), 0.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let start = Instant::now();
        let mut meter = RateMeter::new(WINDOW);
        for _ in 0..7 {
            meter.record_arrival(start);
        }
        // 7 / 60 = 0.1166...
        assert_eq!(meter.recompute(start + Duration::from_secs(1)), 0.1);
    }

    #[test]
    fn test_half_tenth_rounds_up() {
        let start = Instant::now();
        let mut meter = RateMeter::new(WINDOW);
        for _ in 0..9 {
            meter.record_arrival(start);
        }
        // 9 / 60 = 0.15
        assert_eq!(meter.recompute(start + Duration::from_secs(1)), 0.2);
    }
}
