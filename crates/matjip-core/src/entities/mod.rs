//! Domain entities - core business objects

mod badge;
mod notification;
mod progress;
mod user_badge;

pub use badge::{Badge, BadgeCategory, BadgeDefinition, BadgeTier};
pub use notification::{Notification, NotificationKind};
pub use progress::{CounterKind, ProgressSnapshot, TagStanding};
pub use user_badge::{EarnedBadge, GrantOutcome, UserBadge, MAX_FEATURED_BADGES};
