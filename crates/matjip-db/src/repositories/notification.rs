//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use matjip_core::entities::Notification;
use matjip_core::traits::{NotificationRepository, RepoResult};
use matjip_core::value_objects::Snowflake;

use crate::models::NotificationModel;

use super::error::{map_db_error, notification_not_found, require_affected};

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn list_by_user(
        &self,
        user_id: Snowflake,
        before: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_id, type, message, badge_id, is_read, created_at
            FROM notifications
            WHERE user_id = $1 AND ($2::BIGINT IS NULL OR id < $2)
            ORDER BY id DESC
            LIMIT $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(before.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_unread(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND NOT is_read
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, user_id: Snowflake, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET is_read = TRUE
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        require_affected(result.rows_affected(), || notification_not_found(id))
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET is_read = TRUE
            WHERE user_id = $1 AND NOT is_read
            "#,
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM notifications WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        require_affected(result.rows_affected(), || notification_not_found(id))
    }
}
