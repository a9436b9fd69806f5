//! Scenarium Shared - wire contract between Engine and Player
//!
//! Everything the two sides exchange over HTTP lives here: request and
//! response payloads plus the error vocabulary.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde and the domain crate
//! 2. **No business logic** - pure data types and serialization
//! 3. **No domain newtypes in DTOs** - payloads carry raw integers and the
//!    edges convert to [`ScenarioId`] at the boundary
//!
//! [`Scenario`] itself is the one vocabulary type shared verbatim: the list
//! and detail endpoints serve domain records as-is.

pub mod dto;

pub use dto::{ErrorBody, ErrorCode, LikeCountData, LikeRequest};

// Vocabulary types both sides name the same way.
pub use scenarium_domain::{Scenario, ScenarioId};
