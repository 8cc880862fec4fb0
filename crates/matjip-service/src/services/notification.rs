//! Notification service
//!
//! Inbox reads and read-state updates. Badge notifications are written by
//! the award path, never here.

use matjip_core::entities::Notification;
use matjip_core::Snowflake;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use crate::dto::{NotificationResponse, PaginatedResponse};

/// Page size used when the caller gives none
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Largest page a caller may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page size actually used for a requested `limit`
pub fn page_size(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest notifications first, strictly older than `before` when given
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Snowflake,
        before: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<Notification>> {
        Ok(self
            .ctx
            .notification_repo()
            .list_by_user(user_id, before, page_size(limit))
            .await?)
    }

    /// One page of the inbox with the cursor for the next one
    #[instrument(skip(self))]
    pub async fn page(
        &self,
        user_id: Snowflake,
        before: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<NotificationResponse>> {
        let notifications = self.list(user_id, before, limit).await?;
        let data: Vec<NotificationResponse> = notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect();

        Ok(PaginatedResponse::new(data, page_size(limit), |n| {
            n.id.clone()
        }))
    }

    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: Snowflake) -> ServiceResult<i64> {
        Ok(self.ctx.notification_repo().count_unread(user_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn mark_read(&self, user_id: Snowflake, notification_id: Snowflake) -> ServiceResult<()> {
        Ok(self
            .ctx
            .notification_repo()
            .mark_read(user_id, notification_id)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, user_id: Snowflake) -> ServiceResult<u64> {
        let updated = self.ctx.notification_repo().mark_all_read(user_id).await?;
        info!(user_id = %user_id, updated, "Notifications marked read");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, notification_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .notification_repo()
            .delete(user_id, notification_id)
            .await?;

        info!(
            user_id = %user_id,
            notification_id = %notification_id,
            "Notification deleted"
        );

        Ok(())
    }
}
