//! PostgreSQL implementation of UserBadgeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use matjip_core::entities::{EarnedBadge, GrantOutcome, Notification, UserBadge};
use matjip_core::error::DomainError;
use matjip_core::traits::{RepoResult, UserBadgeRepository};
use matjip_core::value_objects::Snowflake;

use crate::models::{EarnedBadgeModel, UserBadgeModel};

use super::error::{map_db_error, require_affected, user_badge_not_found};

/// PostgreSQL implementation of UserBadgeRepository
#[derive(Clone)]
pub struct PgUserBadgeRepository {
    pool: PgPool,
}

impl PgUserBadgeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserBadgeRepository for PgUserBadgeRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, badge_id: Snowflake) -> RepoResult<Option<UserBadge>> {
        let result = sqlx::query_as::<_, UserBadgeModel>(
            r#"
            SELECT id, user_id, badge_id, earned_at, is_featured, is_viewed
            FROM user_badges
            WHERE user_id = $1 AND badge_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(badge_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserBadge::from))
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<EarnedBadge>> {
        let results = sqlx::query_as::<_, EarnedBadgeModel>(
            r#"
            SELECT ub.id, ub.user_id, ub.badge_id, ub.earned_at, ub.is_featured, ub.is_viewed,
                   b.name, b.description, b.icon, b.tier, b.category
            FROM user_badges ub
            JOIN badges b ON b.id = ub.badge_id
            WHERE ub.user_id = $1
            ORDER BY ub.earned_at DESC, ub.id DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(EarnedBadge::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn held_badge_names(&self, user_id: Snowflake) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT b.name
            FROM user_badges ub
            JOIN badges b ON b.id = ub.badge_id
            WHERE ub.user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user_badge, notification), fields(user_id = %user_badge.user_id, badge_id = %user_badge.badge_id))]
    async fn grant(
        &self,
        user_badge: &UserBadge,
        notification: &Notification,
    ) -> RepoResult<GrantOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // ON CONFLICT keeps a concurrent duplicate from surfacing as an error
        let inserted = sqlx::query_as::<_, UserBadgeModel>(
            r#"
            INSERT INTO user_badges (id, user_id, badge_id, earned_at, is_featured, is_viewed)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, badge_id) DO NOTHING
            RETURNING id, user_id, badge_id, earned_at, is_featured, is_viewed
            "#,
        )
        .bind(user_badge.id.into_inner())
        .bind(user_badge.user_id.into_inner())
        .bind(user_badge.badge_id.into_inner())
        .bind(user_badge.earned_at)
        .bind(user_badge.is_featured)
        .bind(user_badge.is_viewed)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(inserted) = inserted else {
            tx.rollback().await.map_err(map_db_error)?;
            debug!("User badge already present, nothing granted");
            return Ok(GrantOutcome::AlreadyExists);
        };

        sqlx::query(
            r#"
            INSERT INTO notifications (id, user_id, type, message, badge_id, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(notification.id.into_inner())
        .bind(notification.user_id.into_inner())
        .bind(notification.kind.as_str())
        .bind(&notification.message)
        .bind(notification.badge_id.map(Snowflake::into_inner))
        .bind(notification.is_read)
        .bind(notification.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(GrantOutcome::Created(UserBadge::from(inserted)))
    }

    #[instrument(skip(self))]
    async fn set_featured(
        &self,
        user_id: Snowflake,
        badge_id: Snowflake,
        featured: bool,
        max_featured: usize,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Locking every row of the user serializes concurrent pins
        let rows = sqlx::query_as::<_, (i64, bool)>(
            r#"
            SELECT badge_id, is_featured FROM user_badges
            WHERE user_id = $1
            FOR UPDATE
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let current = rows
            .iter()
            .find(|(id, _)| *id == badge_id.into_inner())
            .map(|(_, is_featured)| *is_featured)
            .ok_or_else(user_badge_not_found)?;

        if featured && !current {
            let pinned = rows.iter().filter(|(_, is_featured)| *is_featured).count();
            if pinned >= max_featured {
                return Err(DomainError::FeaturedLimitReached { max: max_featured });
            }
        }

        let result = sqlx::query(
            r#"
            UPDATE user_badges SET is_featured = $3
            WHERE user_id = $1 AND badge_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(badge_id.into_inner())
        .bind(featured)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        require_affected(result.rows_affected(), user_badge_not_found)?;
        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn mark_viewed(&self, user_id: Snowflake, badge_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE user_badges SET is_viewed = TRUE
            WHERE user_id = $1 AND badge_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(badge_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        require_affected(result.rows_affected(), user_badge_not_found)
    }

    #[instrument(skip(self))]
    async fn mark_all_viewed(&self, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE user_badges SET is_viewed = TRUE
            WHERE user_id = $1 AND NOT is_viewed
            "#,
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count_unviewed(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM user_badges WHERE user_id = $1 AND NOT is_viewed
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn delete_by_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_badges WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
