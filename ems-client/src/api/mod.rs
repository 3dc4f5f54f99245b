//! Resource client
//!
//! One typed request function per (resource, operation) pair, all
//! sharing the single [`HttpClient`] transport. Methods are grouped
//! into per-resource impl blocks, one file each.

mod attendance;
mod auth;
mod departments;
mod employees;
mod leave;
mod notifications;
mod roles;
mod salaries;

use crate::http::HttpClient;

/// Typed access to the EMS REST surface.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: HttpClient,
}

impl ResourceClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying transport (shared with the session store).
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
