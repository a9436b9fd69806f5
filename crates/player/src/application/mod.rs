//! Application layer - client-side services and state
//!
//! Use-case logic for the player: catalog reads, debounced search, and
//! like toggling with the locally persisted liked set.

pub mod error;
pub mod liked_set;
pub mod services;

pub use error::ServiceError;
pub use liked_set::LikedSetStore;
pub use services::{CatalogService, LikeService, LikeToggle, SearchService};
