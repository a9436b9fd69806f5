//! Scenario catalog - the static dataset the engine serves.
//!
//! Records are loaded once at startup, validated, and never mutated. List
//! order is file order; the id index exists only for detail lookups.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use scenarium_domain::{validate_unique_ids, DomainError, Scenario, ScenarioId};

/// Dataset compiled into the binary, used when no override path is set.
const BUILTIN_DATA: &str = include_str!("../data/scenarios.json");

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read scenario data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse scenario data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Immutable, ordered collection of scenarios.
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    by_id: HashMap<ScenarioId, usize>,
}

impl ScenarioCatalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        validate_unique_ids(&scenarios)?;
        let by_id = scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| (scenario.id, index))
            .collect();
        Ok(Self { scenarios, by_id })
    }

    /// Parses a catalog from a JSON array of scenario records.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let scenarios: Vec<Scenario> = serde_json::from_str(raw)?;
        Self::new(scenarios)
    }

    /// Loads a catalog from a JSON file on disk.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&raw)
    }

    /// The dataset bundled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_DATA)
    }

    /// All scenarios in dataset order.
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Looks up a scenario by id.
    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.by_id.get(&id).map(|&index| &self.scenarios[index])
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
