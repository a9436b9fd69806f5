//! Application state and composition.

use crate::catalog::ScenarioCatalog;
use crate::likes::LikeCounter;

/// Main application state.
///
/// Owns the loaded catalog and the like-counter service. Constructed once
/// at startup and passed to HTTP handlers via Axum state; handlers never
/// reach for globals.
pub struct App {
    pub catalog: ScenarioCatalog,
    pub likes: LikeCounter,
}

impl App {
    /// Create a new App with all services wired up.
    pub fn new(catalog: ScenarioCatalog) -> Self {
        Self {
            catalog,
            likes: LikeCounter::new(),
        }
    }
}
