//! Notification model -> entity mapper

use matjip_core::entities::{Notification, NotificationKind};
use matjip_core::value_objects::Snowflake;

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            kind: NotificationKind::parse(&model.kind),
            message: model.message,
            badge_id: model.badge_id.map(Snowflake::new),
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
