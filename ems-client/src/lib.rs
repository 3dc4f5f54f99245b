//! EMS Client - typed client for the EMS REST API
//!
//! Client-side authorization and data-synchronization layer for the
//! employee management backend:
//!
//! - [`SessionStore`]: login/registration, durable session
//!   persistence, restore on startup.
//! - [`ResourceClient`]: one typed call per (resource, operation)
//!   pair over a single bearer-token transport.
//! - [`EntityStore`]: in-memory collections with request lifecycle
//!   flags, updated from request outcomes.
//! - [`RouteGuard`]: composes the session with the role policy to
//!   allow or deny navigation.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod session;
pub mod store;
pub mod validate;

pub use api::ResourceClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::{RouteDecision, RouteGuard, RouteRequirement};
pub use http::HttpClient;
pub use session::{Session, SessionStore};
pub use store::{CollectionView, EntityStore, RequestState};
pub use validate::FieldErrors;

// Re-export shared types for convenience
pub use shared::access::AccessRole;
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
