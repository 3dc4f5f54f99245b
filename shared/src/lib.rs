//! Shared types for the EMS client
//!
//! Common types used across the client layers: entity models, auth
//! request/response DTOs, and the role-based access vocabulary.

pub mod access;
pub mod client;
pub mod models;

// Re-exports
pub use access::AccessRole;
pub use serde::{Deserialize, Serialize};
