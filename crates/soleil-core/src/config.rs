use std::time::Duration;

use crate::constants;
use crate::error::FeedError;

/// Timing and sizing parameters of a feed.
///
/// `Default` yields the fixed constants the dashboard runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub capacity: usize,
    pub seed_size: usize,
    pub seed_spacing: Duration,
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub freshness_window: Duration,
    pub rate_window: Duration,
    pub rate_period: Duration,
    pub clock_period: Duration,
    pub min_score: u8,
    pub max_score: u8,
}

impl FeedConfig {
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.capacity == 0 {
            return Err(FeedError::InvalidConfig("capacity must be non-zero".into()));
        }
        if self.seed_size == 0 || self.seed_size > self.capacity {
            return Err(FeedError::InvalidConfig(format!(
                "seed size {} must be within 1..={}",
                self.seed_size, self.capacity
            )));
        }
        if self.min_delay > self.max_delay {
            return Err(FeedError::InvalidConfig(format!(
                "delay range {:?}..={:?} is empty",
                self.min_delay, self.max_delay
            )));
        }
        if self.min_score > self.max_score {
            return Err(FeedError::InvalidConfig(format!(
                "score range {}..={} is empty",
                self.min_score, self.max_score
            )));
        }
        for (name, period) in [
            ("freshness window", self.freshness_window),
            ("rate window", self.rate_window),
            ("rate period", self.rate_period),
            ("clock period", self.clock_period),
        ] {
            if period.is_zero() {
                return Err(FeedError::InvalidConfig(format!("{name} must be non-zero")));
            }
        }
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: constants::HISTORY_CAPACITY,
            seed_size: constants::SEED_SIZE,
            seed_spacing: constants::SEED_SPACING,
            min_delay: constants::MIN_ARRIVAL_DELAY,
            max_delay: constants::MAX_ARRIVAL_DELAY,
            freshness_window: constants::FRESHNESS_WINDOW,
            rate_window: constants::RATE_WINDOW,
            rate_period: constants::RATE_RECOMPUTE_PERIOD,
            clock_period: constants::CLOCK_TICK_PERIOD,
            min_score: constants::MIN_SCORE,
            max_score: constants::MAX_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FeedConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_seed_larger_than_capacity() {
        let config = FeedConfig {
            capacity: 5,
            ..FeedConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FeedError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_delay_range() {
        let config = FeedConfig {
            min_delay: Duration::from_secs(6),
            ..FeedConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_period() {
        let config = FeedConfig {
            rate_period: Duration::ZERO,
            ..FeedConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid feed configuration: rate period must be non-zero");
    }
}
