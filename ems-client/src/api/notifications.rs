//! Email notification endpoints

use shared::models::{EmailNotification, EmailNotificationInput};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    pub async fn email_notifications(&self) -> ClientResult<Vec<EmailNotification>> {
        self.http().get("/email-notifications").await
    }

    pub async fn email_notification(&self, id: i64) -> ClientResult<EmailNotification> {
        self.http().get(&format!("/email-notifications/{id}")).await
    }

    pub async fn notifications_by_recipient(
        &self,
        email: &str,
    ) -> ClientResult<Vec<EmailNotification>> {
        self.http()
            .get(&format!("/email-notifications/recipient/{email}"))
            .await
    }

    pub async fn create_email_notification(
        &self,
        input: &EmailNotificationInput,
    ) -> ClientResult<EmailNotification> {
        self.http().post("/email-notifications", input).await
    }

    pub async fn delete_email_notification(&self, id: i64) -> ClientResult<()> {
        self.http()
            .delete(&format!("/email-notifications/{id}"))
            .await
    }
}
