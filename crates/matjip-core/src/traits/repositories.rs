//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what the badge engine needs; `matjip-db`
//! provides the PostgreSQL adapters and the integration tests provide
//! in-memory ones.

use async_trait::async_trait;

use crate::entities::{
    Badge, EarnedBadge, GrantOutcome, Notification, ProgressSnapshot, TagStanding, UserBadge,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Badge Repository (catalog, read-mostly)
// ============================================================================

#[async_trait]
pub trait BadgeRepository: Send + Sync {
    /// Find badge by its unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Badge>>;

    /// Find badge by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Badge>>;

    /// List the whole catalog ordered by category, then tier
    async fn list(&self) -> RepoResult<Vec<Badge>>;

    /// Insert a catalog entry or refresh the descriptive fields of the
    /// existing one with the same name. Returns the stored row, whose id is
    /// the pre-existing one on update.
    async fn upsert(&self, badge: &Badge) -> RepoResult<Badge>;
}

// ============================================================================
// UserBadge Repository
// ============================================================================

#[async_trait]
pub trait UserBadgeRepository: Send + Sync {
    /// Find the row for (user, badge)
    async fn find(&self, user_id: Snowflake, badge_id: Snowflake) -> RepoResult<Option<UserBadge>>;

    /// All badges a user holds, newest first
    async fn list_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<EarnedBadge>>;

    /// Names of every badge the user holds
    async fn held_badge_names(&self, user_id: Snowflake) -> RepoResult<Vec<String>>;

    /// Create the user badge and its notification in one transaction.
    ///
    /// A uniqueness violation on (user, badge) rolls the transaction back and
    /// yields `GrantOutcome::AlreadyExists` instead of an error.
    async fn grant(
        &self,
        user_badge: &UserBadge,
        notification: &Notification,
    ) -> RepoResult<GrantOutcome>;

    /// Set or clear the featured flag.
    ///
    /// Pinning is refused with `FeaturedLimitReached` when the user already
    /// has `max_featured` pinned. The count and the write are atomic with
    /// respect to other pins of the same user.
    async fn set_featured(
        &self,
        user_id: Snowflake,
        badge_id: Snowflake,
        featured: bool,
        max_featured: usize,
    ) -> RepoResult<()>;

    /// Mark one badge as seen
    async fn mark_viewed(&self, user_id: Snowflake, badge_id: Snowflake) -> RepoResult<()>;

    /// Mark every badge of the user as seen
    async fn mark_all_viewed(&self, user_id: Snowflake) -> RepoResult<u64>;

    /// Count badges the user has not looked at yet
    async fn count_unviewed(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Delete every badge of the user (administrative reset)
    async fn delete_by_user(&self, user_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// List notifications newest first, optionally before a cursor
    async fn list_by_user(
        &self,
        user_id: Snowflake,
        before: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<Notification>>;

    /// Count unread notifications
    async fn count_unread(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Mark a notification as read
    async fn mark_read(&self, user_id: Snowflake, id: Snowflake) -> RepoResult<()>;

    /// Mark all notifications of the user as read
    async fn mark_all_read(&self, user_id: Snowflake) -> RepoResult<u64>;

    /// Delete a notification
    async fn delete(&self, user_id: Snowflake, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Progress Repository (counters)
// ============================================================================

/// Counter reads always hit storage; nothing here may be cached in process.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Reviews written by the user
    async fn review_count(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Tags created by the user
    async fn tag_count(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Current roulette spin counter
    async fn roulette_spins(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Atomically add one spin and return the new value
    async fn increment_roulette_spins(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Highest upvote count on any single review written by the user
    async fn max_review_likes(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Highest upvote count on any single tag created by the user
    async fn max_tag_likes(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Highest subscriber count on any single tag created by the user
    async fn max_tag_subscribers(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Tags the user subscribes to
    async fn subscription_count(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// GOLD-tier badges the user holds
    async fn gold_badge_count(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Every tag sharing the highest subscriber count
    async fn top_subscribed_tags(&self) -> RepoResult<Vec<TagStanding>>;

    /// Zero the stored counters of the user (administrative reset)
    async fn reset_counters(&self, user_id: Snowflake) -> RepoResult<()>;

    /// Read every counter of the user
    async fn snapshot(&self, user_id: Snowflake) -> RepoResult<ProgressSnapshot> {
        Ok(ProgressSnapshot {
            reviews: self.review_count(user_id).await?,
            tags: self.tag_count(user_id).await?,
            roulette_spins: self.roulette_spins(user_id).await?,
            review_likes: self.max_review_likes(user_id).await?,
            tag_likes: self.max_tag_likes(user_id).await?,
            tag_subscribers: self.max_tag_subscribers(user_id).await?,
            subscriptions: self.subscription_count(user_id).await?,
            gold_badges: self.gold_badge_count(user_id).await?,
        })
    }
}
