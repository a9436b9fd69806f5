//! Search Service - debounced scenario filtering
//!
//! Wraps the pure keyword filter from the domain crate with the reactive
//! plumbing the UI needs: queries are debounced so rapid keystrokes do not
//! each rescan the catalog, and settled results are published through a
//! watch channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use scenarium_domain::{filter_scenarios, Scenario};

use crate::infrastructure::debounce::Debouncer;

/// Service filtering the scenario catalog by search query
///
/// Holds the full catalog for the lifetime of the service; the catalog is
/// static, so there is no refresh path.
pub struct SearchService {
    scenarios: Arc<Vec<Scenario>>,
    results: watch::Sender<Vec<Scenario>>,
    debouncer: Debouncer<String>,
}

impl SearchService {
    /// Create a search service over the given catalog
    ///
    /// `delay` is the quiet interval a query must survive before the
    /// filter runs. Results start as the full catalog (empty query).
    pub fn new(scenarios: Vec<Scenario>, delay: Duration) -> Self {
        let scenarios = Arc::new(scenarios);
        let (results, _) = watch::channel((*scenarios).clone());

        let sender = results.clone();
        let catalog = Arc::clone(&scenarios);
        let debouncer = Debouncer::new(delay, move |raw: String| {
            let filtered = filter_scenarios(&raw, &catalog);
            sender.send_replace(filtered);
        });

        Self {
            scenarios,
            results,
            debouncer,
        }
    }

    /// The full, unfiltered catalog
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Subscribe to filtered results
    ///
    /// The receiver immediately holds the latest published result set.
    pub fn results(&self) -> watch::Receiver<Vec<Scenario>> {
        self.results.subscribe()
    }

    /// Schedule a query; the filter runs once the input goes quiet
    ///
    /// A newer query scheduled before the delay elapses supersedes this
    /// one, and only the newer results are ever published.
    pub fn set_query(&self, raw: &str) {
        self.debouncer.schedule(raw.to_string());
    }

    /// Run a query immediately, bypassing debounce and the channel
    pub fn search(&self, raw: &str) -> Vec<Scenario> {
        filter_scenarios(raw, &self.scenarios)
    }

    /// Discard any query still waiting out its quiet interval
    pub fn cancel_pending(&self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenarium_domain::ScenarioId;

    fn catalog() -> Vec<Scenario> {
        vec![
            Scenario::new(
                ScenarioId::new(1).unwrap(),
                "OOMKilled Pods in Production",
                "Troubleshooting",
                "Production - GKE",
                "Pods were repeatedly OOMKilled due to memory limits set too low.",
            ),
            Scenario::new(
                ScenarioId::new(2).unwrap(),
                "DNS Resolution Failure",
                "Networking",
                "Staging - EKS",
                "CoreDNS pods crashed and services could not resolve names.",
            ),
            Scenario::new(
                ScenarioId::new(3).unwrap(),
                "Node Disk Pressure Evictions",
                "Capacity",
                "Production - bare metal",
                "Log growth filled node disks and pods were evicted.",
            ),
        ]
    }

    fn titles(scenarios: &[Scenario]) -> Vec<&str> {
        scenarios.iter().map(|s| s.title.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_start_with_full_catalog() {
        let service = SearchService::new(catalog(), Duration::from_millis(300));
        let rx = service.results();

        assert_eq!(rx.borrow().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_query_publishes_filtered_results() {
        let service = SearchService::new(catalog(), Duration::from_millis(300));
        let mut rx = service.results();

        service.set_query("memory");
        tokio::time::sleep(Duration::from_millis(310)).await;

        assert!(rx.has_changed().unwrap());
        let results = rx.borrow_and_update().clone();
        assert_eq!(titles(&results), vec!["OOMKilled Pods in Production"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_queries_only_publish_the_last() {
        let service = SearchService::new(catalog(), Duration::from_millis(300));
        let mut rx = service.results();

        service.set_query("dns");
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.set_query("memory");
        tokio::time::sleep(Duration::from_millis(310)).await;

        assert!(rx.has_changed().unwrap());
        let results = rx.borrow_and_update().clone();
        assert_eq!(titles(&results), vec!["OOMKilled Pods in Production"]);
        // The superseded "dns" query never produced a publication.
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_empty_query_restores_full_catalog() {
        let service = SearchService::new(catalog(), Duration::from_millis(300));
        let mut rx = service.results();

        service.set_query("memory");
        tokio::time::sleep(Duration::from_millis(310)).await;
        assert_eq!(rx.borrow_and_update().len(), 1);

        service.set_query("");
        tokio::time::sleep(Duration::from_millis(310)).await;
        assert_eq!(rx.borrow_and_update().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_scheduled_query() {
        let service = SearchService::new(catalog(), Duration::from_millis(300));
        let mut rx = service.results();

        service.set_query("memory");
        service.cancel_pending();
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert!(!rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_bypasses_debounce() {
        let service = SearchService::new(catalog(), Duration::from_millis(300));

        let results = service.search("production");
        assert_eq!(
            titles(&results),
            vec!["OOMKilled Pods in Production", "Node Disk Pressure Evictions"]
        );

        // Immediate search leaves the published results untouched.
        assert_eq!(service.results().borrow().len(), 3);
    }
}
