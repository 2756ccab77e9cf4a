//! Feed-wide constants
//!
//! Every timing and sizing value the engine runs on. `FeedConfig::default()`
//! is built from these.

use std::time::Duration;

/// Maximum number of requests kept in the history buffer.
pub const HISTORY_CAPACITY: usize = 50;

/// Number of synthetic requests the history starts with.
pub const SEED_SIZE: usize = 9;

/// Spacing between the back-dated timestamps of seed requests.
pub const SEED_SPACING: Duration = Duration::from_secs(14);

/// Lower bound of the randomized delay between two generated requests.
pub const MIN_ARRIVAL_DELAY: Duration = Duration::from_millis(1800);

/// Upper bound (inclusive) of the randomized delay between two generated requests.
pub const MAX_ARRIVAL_DELAY: Duration = Duration::from_millis(5000);

/// How long a freshly arrived request stays highlighted.
pub const FRESHNESS_WINDOW: Duration = Duration::from_millis(2200);

/// Trailing window the rolling rate is averaged over.
pub const RATE_WINDOW: Duration = Duration::from_secs(60);

/// Cadence of rolling rate recomputation.
pub const RATE_RECOMPUTE_PERIOD: Duration = Duration::from_secs(2);

/// Cadence of the clock tick.
pub const CLOCK_TICK_PERIOD: Duration = Duration::from_secs(1);

// Score bounds (inclusive)
pub const MIN_SCORE: u8 = 62;
pub const MAX_SCORE: u8 = 98;

// Coordinate box, centred on Paris
pub mod coordinates {
    pub const CENTER_LAT: f64 = 48.85;
    pub const CENTER_LNG: f64 = 2.35;
    /// Full latitude spread; points land within +/- half of it.
    pub const SPREAD_LAT: f64 = 0.12;
    /// Full longitude spread; points land within +/- half of it.
    pub const SPREAD_LNG: f64 = 0.15;
    /// Decimal places kept on generated coordinates.
    pub const PRECISION: i32 = 4;
}
