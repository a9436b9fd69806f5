//! Catalog Service - read access to the scenario catalog
//!
//! Thin use-case wrapper over the engine API port for list and detail
//! views.

use std::sync::Arc;

use scenarium_domain::{Scenario, ScenarioId};
use scenarium_shared::ErrorCode;

use crate::application::ServiceError;
use crate::ports::outbound::{ApiError, ScenarioApiPort};

/// Service for fetching scenarios from the engine
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn ScenarioApiPort>,
}

impl CatalogService {
    /// Create a new CatalogService with the given API port
    pub fn new(api: Arc<dyn ScenarioApiPort>) -> Self {
        Self { api }
    }

    /// Fetch every scenario, in catalog order
    pub async fn list(&self) -> Result<Vec<Scenario>, ServiceError> {
        Ok(self.api.list_scenarios().await?)
    }

    /// Fetch one scenario; unknown ids yield `None`
    pub async fn get(&self, id: ScenarioId) -> Result<Option<Scenario>, ServiceError> {
        match self.api.get_scenario(id).await {
            Ok(scenario) => Ok(Some(scenario)),
            Err(ApiError::Status {
                code: ErrorCode::NotFound,
                ..
            }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
