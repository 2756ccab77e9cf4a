use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;
use tokio::time::Instant;

use crate::models::{Category, Request};

/// Read-only view of the feed handed to renderers.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Newest first, at most the history capacity
    pub requests: Vec<Request>,
    pub fresh_ids: BTreeSet<u64>,
    /// Arrivals per second over the trailing window, one decimal
    pub rate: f64,
    pub category_counts: BTreeMap<Category, usize>,
    pub average_score: u32,
    /// Requests produced since the feed was created, seeds included
    pub total: u64,
    pub running: bool,
    pub now: Instant,
    pub wall_clock: DateTime<Local>,
}

impl Snapshot {
    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh_ids.contains(&id)
    }

    /// Age of `request` against the clock of this snapshot.
    pub fn elapsed(&self, request: &Request) -> Duration {
        self.now.saturating_duration_since(request.created_at)
    }

    /// Number of requests currently held in memory.
    pub fn active(&self) -> usize {
        self.requests.len()
    }

    pub fn count(&self, category: Category) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    pub fn report(&self) -> SnapshotReport<'_> {
        SnapshotReport {
            wall_clock: self.wall_clock.to_rfc3339(),
            running: self.running,
            total: self.total,
            active: self.active(),
            rate: self.rate,
            average_score: self.average_score,
            category_counts: &self.category_counts,
            requests: self
                .requests
                .iter()
                .map(|request| RequestReport {
                    request,
                    location: request.location_label(),
                    elapsed_secs: self.elapsed(request).as_secs(),
                    fresh: self.is_fresh(request.id),
                })
                .collect(),
        }
    }
}

/// Serializable form of a [`Snapshot`], used for machine-readable output.
#[derive(Debug, Serialize)]
pub struct SnapshotReport<'a> {
    pub wall_clock: String,
    pub running: bool,
    pub total: u64,
    pub active: usize,
    pub rate: f64,
    pub average_score: u32,
    pub category_counts: &'a BTreeMap<Category, usize>,
    pub requests: Vec<RequestReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestReport<'a> {
    #[serde(flatten)]
    pub request: &'a Request,
    pub location: &'static str,
    pub elapsed_secs: u64,
    pub fresh: bool,
}
