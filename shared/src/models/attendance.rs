//! Attendance model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::HasId;

/// Attendance record. Punch-in creates the record for the day;
/// punch-out completes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub punch_in_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub punch_out_time: Option<DateTime<Utc>>,
    /// Backend status string, e.g. "PRESENT" / "HALF_DAY" / "ABSENT".
    #[serde(default)]
    pub status: Option<String>,
}

impl HasId for Attendance {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Manual correction payload for an attendance record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punch_in_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punch_out_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
