use std::collections::VecDeque;

use crate::models::Request;

/// Newest-first, capacity-bounded request history.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    requests: VecDeque<Request>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            requests: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend `request`, dropping the oldest entries beyond capacity.
    pub fn push(&mut self, request: Request) {
        debug_assert!(
            self.requests.front().map_or(true, |newest| newest.id < request.id),
            "request ids must strictly increase"
        );
        self.requests.push_front(request);
        self.requests.truncate(self.capacity);
    }

    /// Owned copy of the contents, newest first.
    pub fn snapshot(&self) -> Vec<Request> {
        self.requests.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.requests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RequestGenerator;
    use crate::testing::SequenceRandom;
    use tokio::time::Instant;

    fn request(id: u64) -> Request {
        RequestGenerator::new(62, 98).generate(id, Instant::now(), &mut SequenceRandom::new())
    }

    #[test]
    fn test_push_is_newest_first() {
        let mut buffer = HistoryBuffer::new(50);
        for id in 1..=3 {
            buffer.push(request(id));
        }
        let ids: Vec<u64> = buffer.snapshot().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut buffer = HistoryBuffer::new(50);
        for id in 1..=200 {
            buffer.push(request(id));
            assert!(buffer.iter().count() <= 50);
        }
        assert_eq!(buffer.iter().count(), 50);
        let ids: Vec<u64> = buffer.iter().map(|r| r.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_fifty_first_push_evicts_first() {
        let mut buffer = HistoryBuffer::new(50);
        for id in 1..=51 {
            buffer.push(request(id));
        }
        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 50);
        assert_eq!(snapshot.first().map(|r| r.id), Some(51));
        assert_eq!(snapshot.last().map(|r| r.id), Some(2));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut buffer = HistoryBuffer::new(2);
        buffer.push(request(1));
        let before = buffer.snapshot();
        buffer.push(request(2));
        buffer.push(request(3));
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].id, 1);
    }
}
