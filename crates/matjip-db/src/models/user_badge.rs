//! UserBadge database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_badges table
#[derive(Debug, Clone, FromRow)]
pub struct UserBadgeModel {
    pub id: i64,
    pub user_id: i64,
    pub badge_id: i64,
    pub earned_at: DateTime<Utc>,
    pub is_featured: bool,
    pub is_viewed: bool,
}

/// user_badges joined with badges (from query)
#[derive(Debug, Clone, FromRow)]
pub struct EarnedBadgeModel {
    pub id: i64,
    pub user_id: i64,
    pub badge_id: i64,
    pub earned_at: DateTime<Utc>,
    pub is_featured: bool,
    pub is_viewed: bool,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: String,
    pub category: String,
}
