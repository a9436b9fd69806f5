//! Scenarium Domain - pure types and logic for the scenario catalog.
//!
//! Everything here is deterministic and free of I/O: scenario records and
//! their identifiers, the invariants the catalog enforces, and the keyword
//! search filter. The engine and player crates both build on this
//! vocabulary.

pub mod error;
pub mod ids;
pub mod scenario;
pub mod search;

pub use error::DomainError;
pub use ids::ScenarioId;
pub use scenario::{validate_unique_ids, Scenario};
pub use search::{filter_scenarios, SearchQuery};
