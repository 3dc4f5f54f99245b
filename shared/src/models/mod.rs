//! Data models
//!
//! Entity types mirrored from the EMS backend REST API. Wire format
//! is camelCase JSON; identifiers are backend-assigned `i64` values,
//! and `createdAt`/`updatedAt` timestamps are server-owned.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave;
pub mod notification;
pub mod role;
pub mod salary;

// Re-exports
pub use attendance::*;
pub use department::*;
pub use employee::*;
pub use leave::*;
pub use notification::*;
pub use role::*;
pub use salary::*;

/// Entities with a backend-assigned unique identifier.
///
/// The entity store relies on this to replace/remove items by id
/// after update and delete operations.
pub trait HasId {
    fn id(&self) -> i64;
}
