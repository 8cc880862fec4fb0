//! Admin service
//!
//! Maintenance operations outside the normal award protocol.

use matjip_core::Snowflake;
use serde::Serialize;
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// What a user reset removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResetSummary {
    pub user_id: Snowflake,
    pub badges_removed: u64,
}

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete every badge the user holds and zero their stored counters.
    ///
    /// Notifications are kept. The next triggering action awards badges from
    /// scratch, since UserBadge rows are the only record of what was earned.
    #[instrument(skip(self))]
    pub async fn reset_user(&self, user_id: Snowflake) -> ServiceResult<ResetSummary> {
        self.ctx.progress_repo().reset_counters(user_id).await?;
        let badges_removed = self.ctx.user_badge_repo().delete_by_user(user_id).await?;

        warn!(user_id = %user_id, badges_removed, "User badge progress reset");

        Ok(ResetSummary {
            user_id,
            badges_removed,
        })
    }
}
