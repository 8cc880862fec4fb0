//! Badge database model

use sqlx::FromRow;

/// Database model for badges table
#[derive(Debug, Clone, FromRow)]
pub struct BadgeModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: String,
    pub category: String,
}
