//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use matjip_core::entities::{BadgeCategory, BadgeTier, CounterKind};
use matjip_core::BadgeLadder;
use serde::Serialize;

/// Cursor-paginated list
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    /// Pass as `before` to fetch the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_before: Option<String>,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// `limit` is the page size that was requested; a full page may have more
    pub fn new(data: Vec<T>, limit: i64, cursor: impl Fn(&T) -> String) -> Self {
        let has_more = data.len() as i64 >= limit;
        let next_before = if has_more { data.last().map(cursor) } else { None };
        Self {
            data,
            next_before,
            has_more,
        }
    }
}

/// Catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct BadgeResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: BadgeTier,
    pub category: BadgeCategory,
}

/// A badge the user holds
#[derive(Debug, Clone, Serialize)]
pub struct EarnedBadgeResponse {
    #[serde(flatten)]
    pub badge: BadgeResponse,
    pub earned_at: DateTime<Utc>,
    pub is_featured: bool,
    pub is_viewed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_id: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Where a user stands on one ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderProgress {
    pub counter: CounterKind,
    pub count: i64,
    /// Badges whose threshold `count` has reached, lowest first
    pub reached: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_badge: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_threshold: Option<i64>,
}

impl LadderProgress {
    pub fn new(ladder: &BadgeLadder, count: i64) -> Self {
        let next = ladder.next(count);
        Self {
            counter: ladder.counter,
            count,
            reached: ladder.reached(count).map(|r| r.badge).collect(),
            next_badge: next.map(|r| r.badge),
            next_threshold: next.map(|r| r.threshold),
        }
    }

    /// How far the counter is from the next rung
    pub fn remaining(&self) -> Option<i64> {
        self.next_threshold.map(|t| t - self.count)
    }

    /// Top rung reached
    pub fn is_complete(&self) -> bool {
        self.next_threshold.is_none()
    }
}
