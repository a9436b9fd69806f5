//! Application services
//!
//! This module contains application services that implement use cases
//! for the Scenarium player. Services depend on port traits, not concrete
//! infrastructure implementations.

pub mod catalog_service;
pub mod like_service;
pub mod search_service;

pub use catalog_service::CatalogService;
pub use like_service::{LikeService, LikeToggle};
pub use search_service::SearchService;
