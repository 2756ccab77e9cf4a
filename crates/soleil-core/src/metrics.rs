use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, Request};

/// Values derived from the history. Never stored; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Count per category. Every category is present, zero included.
    pub category_counts: BTreeMap<Category, usize>,
    /// Mean score rounded half up. `None` only for an empty input.
    pub average_score: Option<u32>,
}

pub fn aggregate<'a, I>(requests: I) -> Metrics
where
    I: IntoIterator<Item = &'a Request>,
{
    let mut category_counts: BTreeMap<Category, usize> =
        Category::ALL.iter().map(|&c| (c, 0)).collect();
    let mut total_score: u64 = 0;
    let mut len: u64 = 0;

    for request in requests {
        *category_counts.entry(request.category).or_insert(0) += 1;
        total_score += request.score as u64;
        len += 1;
    }

    let average_score = (len > 0).then(|| ((total_score * 2 + len) / (len * 2)) as u32);

    Metrics {
        category_counts,
        average_score,
    }
}
