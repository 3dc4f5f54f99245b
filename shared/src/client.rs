//! Auth request/response types
//!
//! Common request/response types used in API communication with the
//! EMS backend auth endpoints.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::access::AccessRole;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request. The backend accepts a username or an email address
/// in the same field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username_or_email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username_or_email: username_or_email.into(),
            password: password.into(),
        }
    }
}

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// User information as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    /// Role string as assigned by the backend. Values outside the
    /// closed role set carry zero privilege on the client.
    pub role: String,
}

impl UserInfo {
    /// Parses the role string leniently; unknown roles yield `None`.
    pub fn access_role(&self) -> Option<AccessRole> {
        AccessRole::from_str(&self.role).ok()
    }
}

/// Login response data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Registration response. Some backend configurations log the new
/// user in immediately (token present); others only return the
/// created user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}
