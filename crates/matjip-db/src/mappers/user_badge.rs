//! UserBadge model -> entity mappers

use matjip_core::entities::{Badge, EarnedBadge, UserBadge};
use matjip_core::error::DomainError;
use matjip_core::value_objects::Snowflake;

use crate::models::{BadgeModel, EarnedBadgeModel, UserBadgeModel};

impl From<UserBadgeModel> for UserBadge {
    fn from(model: UserBadgeModel) -> Self {
        UserBadge {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            badge_id: Snowflake::new(model.badge_id),
            earned_at: model.earned_at,
            is_featured: model.is_featured,
            is_viewed: model.is_viewed,
        }
    }
}

impl TryFrom<EarnedBadgeModel> for EarnedBadge {
    type Error = DomainError;

    fn try_from(model: EarnedBadgeModel) -> Result<Self, Self::Error> {
        let badge = Badge::try_from(BadgeModel {
            id: model.badge_id,
            name: model.name,
            description: model.description,
            icon: model.icon,
            tier: model.tier,
            category: model.category,
        })?;
        let user_badge = UserBadge::from(UserBadgeModel {
            id: model.id,
            user_id: model.user_id,
            badge_id: model.badge_id,
            earned_at: model.earned_at,
            is_featured: model.is_featured,
            is_viewed: model.is_viewed,
        });
        Ok(EarnedBadge { user_badge, badge })
    }
}
