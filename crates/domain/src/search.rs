//! Keyword search over scenario records.
//!
//! The contract is deliberately small: a query is split on whitespace into
//! case-insensitive keywords, a scenario matches when every keyword is a
//! substring of at least one searchable field (title, environment, summary),
//! and filtering never reorders the input. There is no ranking and no query
//! syntax beyond plain words.

use crate::scenario::Scenario;

/// A parsed search query: lowercase keywords, whitespace-delimited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    keywords: Vec<String>,
}

impl SearchQuery {
    /// Parses raw user input into keywords.
    ///
    /// Splitting on runs of whitespace collapses leading, trailing, and
    /// repeated whitespace; an all-whitespace query parses to the empty
    /// query.
    pub fn parse(raw: &str) -> Self {
        let keywords = raw
            .split_whitespace()
            .map(|token| token.to_lowercase())
            .collect();
        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when every keyword appears in at least one searchable field.
    ///
    /// Keywords are independent: "dns staging" matches a scenario whose
    /// title contains "dns" and whose environment contains "staging".
    pub fn matches(&self, scenario: &Scenario) -> bool {
        let title = scenario.title.to_lowercase();
        let environment = scenario.environment.to_lowercase();
        let summary = scenario.summary.to_lowercase();
        self.keywords.iter().all(|keyword| {
            title.contains(keyword.as_str())
                || environment.contains(keyword.as_str())
                || summary.contains(keyword.as_str())
        })
    }
}

/// Filters `scenarios` by `query`, preserving the original order.
///
/// An empty (or all-whitespace) query returns the full list unchanged.
pub fn filter_scenarios(query: &str, scenarios: &[Scenario]) -> Vec<Scenario> {
    let parsed = SearchQuery::parse(query);
    if parsed.is_empty() {
        return scenarios.to_vec();
    }
    scenarios
        .iter()
        .filter(|scenario| parsed.matches(scenario))
        .cloned()
        .collect()
}
