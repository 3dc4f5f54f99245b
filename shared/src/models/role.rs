//! Role model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::HasId;

/// Role entity as managed by the backend roles resource. Distinct
/// from [`crate::access::AccessRole`], which is the closed session
/// vocabulary: the roles resource is plain reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl HasId for Role {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Role form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
