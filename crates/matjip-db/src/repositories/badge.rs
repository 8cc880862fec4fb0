//! PostgreSQL implementation of BadgeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use matjip_core::entities::Badge;
use matjip_core::traits::{BadgeRepository, RepoResult};
use matjip_core::value_objects::Snowflake;

use crate::models::BadgeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BadgeRepository
#[derive(Clone)]
pub struct PgBadgeRepository {
    pool: PgPool,
}

impl PgBadgeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BadgeRepository for PgBadgeRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Badge>> {
        let result = sqlx::query_as::<_, BadgeModel>(
            r#"
            SELECT id, name, description, icon, tier, category
            FROM badges
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Badge::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Badge>> {
        let result = sqlx::query_as::<_, BadgeModel>(
            r#"
            SELECT id, name, description, icon, tier, category
            FROM badges
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Badge::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Badge>> {
        let results = sqlx::query_as::<_, BadgeModel>(
            r#"
            SELECT id, name, description, icon, tier, category
            FROM badges
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut badges = results
            .into_iter()
            .map(Badge::try_from)
            .collect::<RepoResult<Vec<_>>>()?;
        // enum order, not text order
        badges.sort_by(|a, b| (a.category, a.tier, a.id).cmp(&(b.category, b.tier, b.id)));
        Ok(badges)
    }

    #[instrument(skip(self, badge), fields(name = %badge.name))]
    async fn upsert(&self, badge: &Badge) -> RepoResult<Badge> {
        let stored = sqlx::query_as::<_, BadgeModel>(
            r#"
            INSERT INTO badges (id, name, description, icon, tier, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name) DO UPDATE
            SET description = EXCLUDED.description,
                icon = EXCLUDED.icon,
                tier = EXCLUDED.tier,
                category = EXCLUDED.category
            RETURNING id, name, description, icon, tier, category
            "#,
        )
        .bind(badge.id.into_inner())
        .bind(&badge.name)
        .bind(&badge.description)
        .bind(&badge.icon)
        .bind(badge.tier.as_str())
        .bind(badge.category.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Badge::try_from(stored)
    }
}
