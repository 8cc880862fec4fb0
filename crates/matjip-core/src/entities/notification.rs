//! Notification entity - a user-facing event in the notification list

use chrono::{DateTime, Utc};
use std::fmt;

use super::badge::Badge;
use crate::value_objects::Snowflake;

/// Notification discriminator
///
/// Only `NEW_BADGE` is produced by the badge engine. Rows written by other
/// parts of the app keep their type string untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    NewBadge,
    Other(String),
}

impl NotificationKind {
    pub const NEW_BADGE: &'static str = "NEW_BADGE";

    pub fn as_str(&self) -> &str {
        match self {
            Self::NewBadge => Self::NEW_BADGE,
            Self::Other(kind) => kind,
        }
    }

    pub fn parse(s: &str) -> Self {
        if s == Self::NEW_BADGE {
            Self::NewBadge
        } else {
            Self::Other(s.to_string())
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub kind: NotificationKind,
    pub message: String,
    /// Badge the notification refers to, for `NEW_BADGE`
    pub badge_id: Option<Snowflake>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build the notification emitted alongside a badge grant
    pub fn new_badge(id: Snowflake, user_id: Snowflake, badge: &Badge) -> Self {
        Self {
            id,
            user_id,
            kind: NotificationKind::NewBadge,
            message: format!("새로운 배지 '{}'을(를) 획득했습니다!", badge.name),
            badge_id: Some(badge.id),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_badge(&self) -> bool {
        self.kind == NotificationKind::NewBadge
    }
}
