//! Database models - SQLx-compatible structs for PostgreSQL tables

mod badge;
mod notification;
mod progress;
mod user_badge;

pub use badge::BadgeModel;
pub use notification::NotificationModel;
pub use progress::TagStandingModel;
pub use user_badge::{EarnedBadgeModel, UserBadgeModel};
