//! Employee model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Department, HasId, Role};

/// Employee entity. Department and role come back embedded from the
/// backend; both references may be absent on partially populated
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    /// Backend status string, e.g. "ACTIVE" / "INACTIVE".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HasId for Employee {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Employee form payload, used for both create and update. The
/// department and role are referenced by id; the form-level checks
/// run before any network call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(required(message = "Department is required"))]
    pub department_id: Option<i64>,
    #[validate(required(message = "Role is required"))]
    pub role_id: Option<i64>,
    #[validate(required(message = "Joining date is required"))]
    pub joining_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
