//! Badge model -> entity mapper

use matjip_core::entities::Badge;
use matjip_core::error::DomainError;
use matjip_core::value_objects::Snowflake;

use crate::models::BadgeModel;

impl TryFrom<BadgeModel> for Badge {
    type Error = DomainError;

    fn try_from(model: BadgeModel) -> Result<Self, Self::Error> {
        Ok(Badge {
            id: Snowflake::new(model.id),
            tier: model.tier.parse()?,
            category: model.category.parse()?,
            name: model.name,
            description: model.description,
            icon: model.icon,
        })
    }
}
