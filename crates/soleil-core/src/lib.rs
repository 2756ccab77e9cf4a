//! Synthetic live request feed
//!
//! Generates timed synthetic requests against the terrace/sunshine dataset
//! and keeps the rolling state a dashboard needs: a bounded newest-first
//! history, short-lived freshness highlights, a rolling arrival rate, and
//! per-category counts with an average score.

pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod freshness;
pub mod generator;
pub mod history;
pub mod metrics;
pub mod models;
pub mod random;
pub mod rate;
pub mod runtime;
pub mod snapshot;
pub mod tracing_setup;

#[cfg(test)]
pub(crate) mod testing;

pub use config::FeedConfig;
pub use error::FeedError;
pub use models::{Category, Coordinates, Request};
pub use random::{RandomSource, SystemRandom};
pub use runtime::FeedRuntime;
pub use snapshot::{Snapshot, SnapshotReport};
