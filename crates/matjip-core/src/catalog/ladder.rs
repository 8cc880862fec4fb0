//! Badge ladders - ascending threshold tables over a single counter

use crate::entities::CounterKind;

/// One threshold of a ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rung {
    pub threshold: i64,
    pub badge: &'static str,
}

const fn rung(threshold: i64, badge: &'static str) -> Rung {
    Rung { threshold, badge }
}

/// Ascending `(threshold, badge)` table evaluated against one counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLadder {
    pub counter: CounterKind,
    pub rungs: &'static [Rung],
}

impl BadgeLadder {
    /// Every rung whose threshold is at or below `count`, lowest first.
    ///
    /// A counter that jumps past several thresholds at once yields all of
    /// them, so no badge in between is skipped.
    pub fn reached(&self, count: i64) -> impl Iterator<Item = &'static Rung> {
        self.rungs.iter().take_while(move |r| r.threshold <= count)
    }

    /// The first rung above `count`, if any
    pub fn next(&self, count: i64) -> Option<&'static Rung> {
        self.rungs.iter().find(|r| r.threshold > count)
    }

    /// Rung awarded at exactly `count`, if `count` sits on a boundary
    pub fn at(&self, count: i64) -> Option<&'static Rung> {
        self.rungs.iter().find(|r| r.threshold == count)
    }

    pub fn badge_names(&self) -> impl Iterator<Item = &'static str> {
        self.rungs.iter().map(|r| r.badge)
    }
}

pub const REVIEW_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::Reviews,
    rungs: &[rung(1, "첫 발자국"), rung(10, "리뷰어"), rung(50, "프로 리뷰어")],
};

pub const TAG_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::Tags,
    rungs: &[rung(1, "태그 입문자"), rung(10, "태그 수집가"), rung(30, "태그 장인")],
};

pub const ROULETTE_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::RouletteSpins,
    rungs: &[rung(10, "룰렛 초보"), rung(50, "룰렛 애호가"), rung(200, "룰렛 마스터")],
};

pub const REVIEW_LIKE_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::ReviewLikes,
    rungs: &[rung(10, "주목받는 리뷰"), rung(50, "인기 리뷰"), rung(100, "전설의 리뷰")],
};

pub const TAG_LIKE_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::TagLikes,
    rungs: &[rung(10, "호평받는 태그"), rung(50, "사랑받는 태그"), rung(100, "명예의 태그")],
};

pub const TAG_SUBSCRIBER_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::TagSubscribers,
    rungs: &[
        rung(10, "떠오르는 큐레이터"),
        rung(25, "인기 큐레이터"),
        rung(50, "스타 큐레이터"),
    ],
};

pub const SUBSCRIPTION_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::Subscriptions,
    rungs: &[rung(1, "첫 구독"), rung(10, "구독 수집가"), rung(30, "컬렉션 마니아")],
};

/// Badges about badges: thresholds over the number of GOLD badges held
pub const MASTERY_LADDER: BadgeLadder = BadgeLadder {
    counter: CounterKind::GoldBadges,
    rungs: &[rung(1, "골드 콜렉터"), rung(3, "골드 헌터"), rung(7, "그랜드 마스터")],
};

/// Ladders driven directly by user actions, i.e. everything except mastery
pub const ACTION_LADDERS: [BadgeLadder; 7] = [
    REVIEW_LADDER,
    TAG_LADDER,
    ROULETTE_LADDER,
    REVIEW_LIKE_LADDER,
    TAG_LIKE_LADDER,
    TAG_SUBSCRIBER_LADDER,
    SUBSCRIPTION_LADDER,
];
