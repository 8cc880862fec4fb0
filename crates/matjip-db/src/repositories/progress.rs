//! PostgreSQL implementation of ProgressRepository
//!
//! Action counters for reviews and tags are aggregated from their tables;
//! the roulette counter is a column bumped with an atomic UPDATE.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use matjip_core::entities::TagStanding;
use matjip_core::traits::{ProgressRepository, RepoResult};
use matjip_core::value_objects::Snowflake;

use crate::models::TagStandingModel;

use super::error::{map_db_error, require_affected, user_not_found};

/// PostgreSQL implementation of ProgressRepository
#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn scalar(&self, sql: &'static str, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl ProgressRepository for PgProgressRepository {
    #[instrument(skip(self))]
    async fn review_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.scalar("SELECT COUNT(*) FROM reviews WHERE author_id = $1", user_id)
            .await
    }

    #[instrument(skip(self))]
    async fn tag_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.scalar("SELECT COUNT(*) FROM tags WHERE creator_id = $1", user_id)
            .await
    }

    #[instrument(skip(self))]
    async fn roulette_spins(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT roulette_spin_count FROM users WHERE id = $1")
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| user_not_found(user_id))
    }

    #[instrument(skip(self))]
    async fn increment_roulette_spins(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE users SET roulette_spin_count = roulette_spin_count + 1
            WHERE id = $1
            RETURNING roulette_spin_count
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(user_id))
    }

    #[instrument(skip(self))]
    async fn max_review_likes(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.scalar(
            r#"
            SELECT COALESCE(MAX(likes), 0)::BIGINT FROM (
                SELECT COUNT(*) AS likes
                FROM review_votes v
                JOIN reviews r ON r.id = v.review_id
                WHERE r.author_id = $1 AND v.value = 1
                GROUP BY v.review_id
            ) per_review
            "#,
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn max_tag_likes(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.scalar(
            r#"
            SELECT COALESCE(MAX(likes), 0)::BIGINT FROM (
                SELECT COUNT(*) AS likes
                FROM tag_votes v
                JOIN tags t ON t.id = v.tag_id
                WHERE t.creator_id = $1 AND v.value = 1
                GROUP BY v.tag_id
            ) per_tag
            "#,
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn max_tag_subscribers(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.scalar(
            r#"
            SELECT COALESCE(MAX(subscribers), 0)::BIGINT FROM (
                SELECT COUNT(*) AS subscribers
                FROM tag_subscriptions s
                JOIN tags t ON t.id = s.tag_id
                WHERE t.creator_id = $1
                GROUP BY s.tag_id
            ) per_tag
            "#,
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn subscription_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.scalar(
            "SELECT COUNT(*) FROM tag_subscriptions WHERE user_id = $1",
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn gold_badge_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.scalar(
            r#"
            SELECT COUNT(*)
            FROM user_badges ub
            JOIN badges b ON b.id = ub.badge_id
            WHERE ub.user_id = $1 AND b.tier = 'GOLD'
            "#,
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn top_subscribed_tags(&self) -> RepoResult<Vec<TagStanding>> {
        // Inner join: tags without subscribers never rank
        let results = sqlx::query_as::<_, TagStandingModel>(
            r#"
            WITH counts AS (
                SELECT t.id AS tag_id, t.creator_id, COUNT(*) AS subscriber_count
                FROM tags t
                JOIN tag_subscriptions s ON s.tag_id = t.id
                GROUP BY t.id, t.creator_id
            )
            SELECT tag_id, creator_id, subscriber_count
            FROM counts
            WHERE subscriber_count = (SELECT MAX(subscriber_count) FROM counts)
            ORDER BY tag_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TagStanding::from).collect())
    }

    #[instrument(skip(self))]
    async fn reset_counters(&self, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET roulette_spin_count = 0 WHERE id = $1")
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        require_affected(result.rows_affected(), || user_not_found(user_id))
    }
}
