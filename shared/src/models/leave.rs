//! Leave type and leave request models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::HasId;

/// Leave type entity (e.g. annual, sick, unpaid).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub max_days: Option<i32>,
}

impl HasId for LeaveType {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Leave type form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_days: Option<i32>,
}

/// Workflow status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Leave request entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub leave_type_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    /// Set by the backend when a manager approves or rejects.
    #[serde(default)]
    pub approver_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HasId for LeaveRequest {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Leave request form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestInput {
    #[validate(required(message = "Employee is required"))]
    pub employee_id: Option<i64>,
    #[validate(required(message = "Leave type is required"))]
    pub leave_type_id: Option<i64>,
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDate>,
    #[validate(required(message = "End date is required"))]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
