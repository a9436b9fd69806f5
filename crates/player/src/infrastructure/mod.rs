//! Infrastructure adapters - concrete implementations of outbound ports

pub mod api;
pub mod debounce;
pub mod storage;

pub use api::HttpScenarioApi;
pub use debounce::Debouncer;
pub use storage::FileStorageProvider;
