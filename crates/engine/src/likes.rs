//! Like counter service.
//!
//! In-process counts keyed by scenario id. Counts live exactly as long as
//! the process: restarts reset them, and horizontally scaled instances
//! each keep their own map. Nothing here authenticates or deduplicates
//! callers; the client's liked set is the only (advisory) guard against
//! repeat likes.

use dashmap::DashMap;

use scenarium_domain::ScenarioId;

/// Concurrency-safe map of scenario id to like count.
///
/// Entries appear lazily on first reference. Each mutation is a single
/// read-modify-write under the map's entry lock, so concurrent handlers
/// never lose updates.
pub struct LikeCounter {
    counts: DashMap<ScenarioId, u64>,
}

impl LikeCounter {
    pub fn new() -> Self {
        Self {
            counts: DashMap::new(),
        }
    }

    /// Current count for a scenario, zero if never referenced.
    pub fn get(&self, id: ScenarioId) -> u64 {
        self.counts.get(&id).map(|entry| *entry).unwrap_or(0)
    }

    /// Adds one like and returns the new count.
    pub fn increment(&self, id: ScenarioId) -> u64 {
        let mut entry = self.counts.entry(id).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Removes one like, flooring at zero, and returns the new count.
    pub fn decrement(&self, id: ScenarioId) -> u64 {
        let mut entry = self.counts.entry(id).or_insert(0);
        *entry = entry.saturating_sub(1);
        *entry
    }

    /// Number of ids that have been referenced at least once.
    pub fn tracked(&self) -> usize {
        self.counts.len()
    }
}

impl Default for LikeCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn id(raw: u32) -> ScenarioId {
        ScenarioId::new(raw).unwrap()
    }

    #[test]
    fn unreferenced_id_reads_zero() {
        let likes = LikeCounter::new();
        assert_eq!(likes.get(id(1)), 0);
        assert_eq!(likes.tracked(), 0);
    }

    #[test]
    fn increment_then_get() {
        let likes = LikeCounter::new();
        assert_eq!(likes.increment(id(1)), 1);
        assert_eq!(likes.get(id(1)), 1);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let likes = LikeCounter::new();
        assert_eq!(likes.decrement(id(1)), 0);
        assert_eq!(likes.decrement(id(1)), 0);
        assert_eq!(likes.get(id(1)), 0);
    }

    #[test]
    fn full_sequence_on_a_fresh_id() {
        let likes = LikeCounter::new();
        let id = id(42);
        assert_eq!(likes.increment(id), 1);
        assert_eq!(likes.increment(id), 2);
        assert_eq!(likes.decrement(id), 1);
        assert_eq!(likes.decrement(id), 0);
        assert_eq!(likes.decrement(id), 0);
    }

    #[test]
    fn decrement_returns_to_pre_increment_value() {
        let likes = LikeCounter::new();
        let id = id(5);
        likes.increment(id);
        likes.increment(id);
        let before = likes.get(id);
        likes.increment(id);
        assert_eq!(likes.decrement(id), before);
    }

    #[test]
    fn counters_are_independent_per_id() {
        let likes = LikeCounter::new();
        likes.increment(id(1));
        likes.increment(id(1));
        likes.increment(id(2));
        assert_eq!(likes.get(id(1)), 2);
        assert_eq!(likes.get(id(2)), 1);
        assert_eq!(likes.tracked(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_are_not_lost() {
        let likes = Arc::new(LikeCounter::new());
        let target = id(9);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let likes = likes.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    likes.increment(target);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(likes.get(target), 800);
    }
}
