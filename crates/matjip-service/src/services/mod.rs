//! Business logic services
//!
//! Award evaluation, progress triggers, and the badge and notification
//! read/update use cases.

pub mod admin;
pub mod award;
pub mod catalog;
pub mod context;
pub mod error;
pub mod notification;
pub mod progress;
pub mod user_badge;

// Re-export all services for convenience
pub use admin::{AdminService, ResetSummary};
pub use award::{AwardOutcome, BadgeAwardService, PostAwardHook};
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use notification::{page_size, NotificationService, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use progress::{ProgressService, RouletteSpin};
pub use user_badge::UserBadgeService;
