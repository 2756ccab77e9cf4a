//! Test doubles shared by the unit tests of this crate.

use std::collections::VecDeque;

use crate::random::RandomSource;

/// Scripted randomness: each kind of draw pops from its own queue.
///
/// When a queue runs dry, `pick` returns 0, `between` returns `min` and
/// `unit` returns 0.5 (the centre of the coordinate box).
#[derive(Debug, Default)]
pub(crate) struct SequenceRandom {
    picks: VecDeque<usize>,
    ints: VecDeque<u64>,
    units: VecDeque<f64>,
}

impl SequenceRandom {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    pub(crate) fn with_ints(mut self, ints: impl IntoIterator<Item = u64>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub(crate) fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }

    fn between(&mut self, min: u64, max: u64) -> u64 {
        self.ints.pop_front().unwrap_or(min).clamp(min, max)
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.5)
    }
}
