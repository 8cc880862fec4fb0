//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in matjip-core.

mod badge;
mod error;
mod notification;
mod progress;
mod user_badge;

pub use badge::PgBadgeRepository;
pub use notification::PgNotificationRepository;
pub use progress::PgProgressRepository;
pub use user_badge::PgUserBadgeRepository;
