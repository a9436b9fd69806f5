//! Scenarium player library.
//!
//! Client-side half of Scenarium: application services for browsing and
//! searching the scenario catalog and for toggling likes, the port traits
//! they depend on, and the desktop infrastructure adapters (HTTP engine
//! client, file-backed storage, debounce timer). UI shells are expected to
//! compose these pieces; none live here.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::{
    CatalogService, LikeService, LikeToggle, LikedSetStore, SearchService, ServiceError,
};
pub use infrastructure::{Debouncer, FileStorageProvider, HttpScenarioApi};
pub use ports::outbound::{ApiError, ScenarioApiPort, StorageProvider};
