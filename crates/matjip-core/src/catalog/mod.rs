//! Badge catalog - static seed data and the threshold ladders that award it

mod definitions;
mod ladder;

pub use definitions::{definition, CATALOG, TAG_RANK_BADGE};
pub use ladder::{
    BadgeLadder, Rung, ACTION_LADDERS, MASTERY_LADDER, REVIEW_LADDER, REVIEW_LIKE_LADDER,
    ROULETTE_LADDER, SUBSCRIPTION_LADDER, TAG_LADDER, TAG_LIKE_LADDER, TAG_SUBSCRIBER_LADDER,
};
