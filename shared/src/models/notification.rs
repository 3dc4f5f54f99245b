//! Email notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::HasId;

/// Email notification record kept by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

impl HasId for EmailNotification {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Email notification form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationInput {
    #[validate(
        length(min = 1, message = "Recipient is required"),
        email(message = "Recipient email is invalid")
    )]
    pub recipient: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
