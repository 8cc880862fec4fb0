//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use matjip_core::entities::{Badge, EarnedBadge, Notification};

use super::responses::{BadgeResponse, EarnedBadgeResponse, NotificationResponse};

impl From<&Badge> for BadgeResponse {
    fn from(badge: &Badge) -> Self {
        Self {
            id: badge.id.to_string(),
            name: badge.name.clone(),
            description: badge.description.clone(),
            icon: badge.icon.clone(),
            tier: badge.tier,
            category: badge.category,
        }
    }
}

impl From<Badge> for BadgeResponse {
    fn from(badge: Badge) -> Self {
        Self::from(&badge)
    }
}

impl From<&EarnedBadge> for EarnedBadgeResponse {
    fn from(earned: &EarnedBadge) -> Self {
        Self {
            badge: BadgeResponse::from(&earned.badge),
            earned_at: earned.user_badge.earned_at,
            is_featured: earned.user_badge.is_featured,
            is_viewed: earned.user_badge.is_viewed,
        }
    }
}

impl From<EarnedBadge> for EarnedBadgeResponse {
    fn from(earned: EarnedBadge) -> Self {
        Self::from(&earned)
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            kind: n.kind.as_str().to_string(),
            message: n.message.clone(),
            badge_id: n.badge_id.map(|id| id.to_string()),
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self::from(&n)
    }
}
