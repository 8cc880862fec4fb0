//! Aggregate rows used by the progress counters

use sqlx::FromRow;

/// Tag with its subscriber count (from ranking query)
#[derive(Debug, Clone, FromRow)]
pub struct TagStandingModel {
    pub tag_id: i64,
    pub creator_id: i64,
    pub subscriber_count: i64,
}
