//! Shared types and models for the Obsidian inventory platform
//!
//! This crate contains the domain records persisted by the backend's
//! collection store and the common types used by its services. It performs
//! no I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
