//! User badge service
//!
//! Reads a user's earned badges and manages the profile flags on them.

use matjip_core::entities::{EarnedBadge, MAX_FEATURED_BADGES};
use matjip_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User badge service
pub struct UserBadgeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserBadgeService<'a> {
    /// Create a new UserBadgeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All badges the user holds, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Snowflake) -> ServiceResult<Vec<EarnedBadge>> {
        Ok(self.ctx.user_badge_repo().list_by_user(user_id).await?)
    }

    /// Badges pinned to the user's profile
    #[instrument(skip(self))]
    pub async fn featured(&self, user_id: Snowflake) -> ServiceResult<Vec<EarnedBadge>> {
        let mut earned = self.list(user_id).await?;
        earned.retain(|e| e.user_badge.is_featured);
        Ok(earned)
    }

    /// Pin or unpin a held badge
    #[instrument(skip(self))]
    pub async fn set_featured(
        &self,
        user_id: Snowflake,
        badge_id: Snowflake,
        featured: bool,
    ) -> ServiceResult<()> {
        let repo = self.ctx.user_badge_repo();

        let current = repo
            .find(user_id, badge_id)
            .await?
            .ok_or(DomainError::UserBadgeNotFound)?;

        if current.is_featured == featured {
            return Ok(());
        }

        repo.set_featured(user_id, badge_id, featured, MAX_FEATURED_BADGES)
            .await?;

        info!(
            user_id = %user_id,
            badge_id = %badge_id,
            featured,
            "Featured badge updated"
        );

        Ok(())
    }

    /// Clear the "new" marker on one badge
    #[instrument(skip(self))]
    pub async fn mark_viewed(&self, user_id: Snowflake, badge_id: Snowflake) -> ServiceResult<()> {
        Ok(self.ctx.user_badge_repo().mark_viewed(user_id, badge_id).await?)
    }

    /// Clear the "new" marker on every badge, returning how many changed
    #[instrument(skip(self))]
    pub async fn mark_all_viewed(&self, user_id: Snowflake) -> ServiceResult<u64> {
        Ok(self.ctx.user_badge_repo().mark_all_viewed(user_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn unviewed_count(&self, user_id: Snowflake) -> ServiceResult<i64> {
        Ok(self.ctx.user_badge_repo().count_unviewed(user_id).await?)
    }
}
