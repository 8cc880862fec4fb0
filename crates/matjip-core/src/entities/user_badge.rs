//! UserBadge entity - records that a user holds a badge

use chrono::{DateTime, Utc};

use super::badge::Badge;
use crate::value_objects::Snowflake;

/// Most badges a user may pin to their profile at once
pub const MAX_FEATURED_BADGES: usize = 5;

/// Join row between a user and a badge; unique per (user, badge)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub badge_id: Snowflake,
    pub earned_at: DateTime<Utc>,
    pub is_featured: bool,
    pub is_viewed: bool,
}

impl UserBadge {
    /// A freshly earned badge: not featured, not yet seen by the user
    pub fn new(id: Snowflake, user_id: Snowflake, badge_id: Snowflake) -> Self {
        Self {
            id,
            user_id,
            badge_id,
            earned_at: Utc::now(),
            is_featured: false,
            is_viewed: false,
        }
    }
}

/// A held badge joined with its catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarnedBadge {
    pub user_badge: UserBadge,
    pub badge: Badge,
}

/// Result of the atomic grant at the storage layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    /// Row and its notification were written in one transaction
    Created(UserBadge),
    /// The (user, badge) row already existed; nothing was written
    AlreadyExists,
}

impl GrantOutcome {
    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
