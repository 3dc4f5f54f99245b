//! Email notification collection operations

use shared::models::{EmailNotification, EmailNotificationInput};

use super::{CollectionView, EntityStore};
use crate::error::ClientResult;
use crate::validate;

impl EntityStore {
    pub async fn fetch_email_notifications(&self) -> ClientResult<()> {
        self.run_list(&self.notifications, self.api.email_notifications())
            .await
    }

    pub async fn fetch_notifications_by_recipient(&self, email: &str) -> ClientResult<()> {
        self.run_list(
            &self.notifications,
            self.api.notifications_by_recipient(email),
        )
        .await
    }

    pub async fn create_email_notification(
        &self,
        input: &EmailNotificationInput,
    ) -> ClientResult<()> {
        validate::check(input)?;
        self.run_create(
            &self.notifications,
            self.api.create_email_notification(input),
        )
        .await
    }

    pub async fn delete_email_notification(&self, id: i64) -> ClientResult<()> {
        self.run_delete(
            &self.notifications,
            id,
            self.api.delete_email_notification(id),
        )
        .await
    }

    pub async fn notifications_view(&self) -> CollectionView<EmailNotification> {
        self.notifications.read().await.view()
    }

    pub async fn clear_notification_error(&self) {
        self.notifications.write().await.clear_error();
    }

    pub async fn acknowledge_notification_operation(&self) {
        self.notifications.write().await.acknowledge();
    }
}
