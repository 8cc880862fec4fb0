//! Ranking row -> entity mapper

use matjip_core::entities::TagStanding;
use matjip_core::value_objects::Snowflake;

use crate::models::TagStandingModel;

impl From<TagStandingModel> for TagStanding {
    fn from(model: TagStandingModel) -> Self {
        TagStanding {
            tag_id: Snowflake::new(model.tag_id),
            creator_id: Snowflake::new(model.creator_id),
            subscriber_count: model.subscriber_count,
        }
    }
}
