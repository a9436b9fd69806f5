//! Platform abstraction port for cross-platform compatibility
//!
//! This trait abstracts platform-specific storage so that:
//! 1. Application code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const LIKED_SCENARIOS: &str = "scenarium_liked_scenarios";
}
