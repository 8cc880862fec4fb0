//! Data transfer objects for badge and notification output
//!
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

pub mod mappers;
pub mod responses;

pub use responses::{
    BadgeResponse, EarnedBadgeResponse, LadderProgress, NotificationResponse, PaginatedResponse,
};
