//! Progress counters - the inputs every badge threshold is compared against

use serde::Serialize;
use std::fmt;

use crate::value_objects::Snowflake;

/// Which counter a badge ladder reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    /// Reviews written by the user
    Reviews,
    /// Tags created by the user
    Tags,
    /// Roulette spins (stored field, atomically incremented)
    RouletteSpins,
    /// Highest upvote count on any single review of the user
    ReviewLikes,
    /// Highest upvote count on any single tag of the user
    TagLikes,
    /// Highest subscriber count on any single tag of the user
    TagSubscribers,
    /// Tags the user subscribes to
    Subscriptions,
    /// GOLD-tier badges held
    GoldBadges,
}

impl CounterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reviews => "reviews",
            Self::Tags => "tags",
            Self::RouletteSpins => "roulette_spins",
            Self::ReviewLikes => "review_likes",
            Self::TagLikes => "tag_likes",
            Self::TagSubscribers => "tag_subscribers",
            Self::Subscriptions => "subscriptions",
            Self::GoldBadges => "gold_badges",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every counter of one user, read at a single point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub reviews: i64,
    pub tags: i64,
    pub roulette_spins: i64,
    pub review_likes: i64,
    pub tag_likes: i64,
    pub tag_subscribers: i64,
    pub subscriptions: i64,
    pub gold_badges: i64,
}

impl ProgressSnapshot {
    pub fn get(&self, kind: CounterKind) -> i64 {
        match kind {
            CounterKind::Reviews => self.reviews,
            CounterKind::Tags => self.tags,
            CounterKind::RouletteSpins => self.roulette_spins,
            CounterKind::ReviewLikes => self.review_likes,
            CounterKind::TagLikes => self.tag_likes,
            CounterKind::TagSubscribers => self.tag_subscribers,
            CounterKind::Subscriptions => self.subscriptions,
            CounterKind::GoldBadges => self.gold_badges,
        }
    }
}

/// One row of the tag subscriber ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStanding {
    pub tag_id: Snowflake,
    pub creator_id: Snowflake,
    pub subscriber_count: i64,
}
