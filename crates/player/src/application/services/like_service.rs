//! Like Service - toggling likes against the engine
//!
//! Owns the client's liked-scenario set and the per-scenario pending
//! flags. A toggle awaits the engine before any state changes: on success
//! the membership flips and the set is persisted, on failure everything
//! stays as it was and the caller surfaces the error.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;

use scenarium_domain::ScenarioId;

use crate::application::liked_set::LikedSetStore;
use crate::application::ServiceError;
use crate::ports::outbound::{ScenarioApiPort, StorageProvider};

/// Outcome of a completed like toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeToggle {
    pub id: ScenarioId,
    /// Count reported by the engine after the mutation
    pub count: u64,
    /// Liked state after the toggle
    pub liked: bool,
}

/// Service coordinating like toggles with the engine and local storage
///
/// The liked set is loaded once at construction; every successful toggle
/// rewrites the stored copy. Repeated toggles for the same scenario while
/// a request is still in flight are suppressed, which keeps rapid clicks
/// from being recorded as several likes.
pub struct LikeService<S: StorageProvider> {
    api: Arc<dyn ScenarioApiPort>,
    store: LikedSetStore<S>,
    liked: Mutex<BTreeSet<ScenarioId>>,
    in_flight: Mutex<HashSet<ScenarioId>>,
}

impl<S: StorageProvider> LikeService<S> {
    /// Create a new LikeService, reading the persisted liked set
    pub fn new(api: Arc<dyn ScenarioApiPort>, store: LikedSetStore<S>) -> Self {
        let liked = store.load();
        Self {
            api,
            store,
            liked: Mutex::new(liked),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Whether this client has liked the given scenario
    pub async fn is_liked(&self, id: ScenarioId) -> bool {
        self.liked.lock().await.contains(&id)
    }

    /// Snapshot of every scenario id this client has liked
    pub async fn liked(&self) -> BTreeSet<ScenarioId> {
        self.liked.lock().await.clone()
    }

    /// Current like count for a scenario, straight from the engine
    pub async fn count(&self, id: ScenarioId) -> Result<u64, ServiceError> {
        let data = self.api.like_count(id).await?;
        Ok(data.count)
    }

    /// Toggle the like state for a scenario
    ///
    /// Not liked yet means an increment, already liked means a decrement.
    /// Returns `Ok(None)` when a toggle for the same scenario is still in
    /// flight; the earlier call owns the outcome and this one is dropped.
    pub async fn toggle(&self, id: ScenarioId) -> Result<Option<LikeToggle>, ServiceError> {
        if !self.in_flight.lock().await.insert(id) {
            tracing::debug!("Toggle for scenario {} already in flight", id);
            return Ok(None);
        }

        let was_liked = self.liked.lock().await.contains(&id);

        let result = if was_liked {
            self.api.unlike(id).await
        } else {
            self.api.like(id).await
        };

        let outcome = match result {
            Ok(data) => {
                let snapshot = {
                    let mut liked = self.liked.lock().await;
                    if was_liked {
                        liked.remove(&id);
                    } else {
                        liked.insert(id);
                    }
                    liked.clone()
                };
                self.store.save(&snapshot);
                Ok(Some(LikeToggle {
                    id,
                    count: data.count,
                    liked: !was_liked,
                }))
            }
            Err(e) => {
                tracing::warn!("Like toggle failed for scenario {}: {}", id, e);
                Err(e.into())
            }
        };

        self.in_flight.lock().await.remove(&id);

        outcome
    }
}
