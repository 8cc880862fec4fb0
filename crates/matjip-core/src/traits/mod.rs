//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BadgeRepository, NotificationRepository, ProgressRepository, RepoResult, UserBadgeRepository,
};
