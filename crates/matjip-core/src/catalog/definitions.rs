//! Seed data for the badge catalog

use crate::entities::{BadgeCategory, BadgeDefinition, BadgeTier};

const fn def(
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    tier: BadgeTier,
    category: BadgeCategory,
) -> BadgeDefinition {
    BadgeDefinition {
        name,
        description,
        icon,
        tier,
        category,
    }
}

use BadgeCategory::{Activity, Collection, Mastery, Reputation, Special};
use BadgeTier::{Bronze, Gold, Silver};

/// Awarded to the creator(s) of the most-subscribed tag
pub const TAG_RANK_BADGE: &str = "태그 랭킹 1위";

/// Every badge the app can award
pub const CATALOG: &[BadgeDefinition] = &[
    // Activity: reviews
    def("첫 발자국", "첫 번째 리뷰를 작성했어요", "footprint.svg", Bronze, Activity),
    def("리뷰어", "리뷰를 10개 작성했어요", "reviewer.svg", Silver, Activity),
    def("프로 리뷰어", "리뷰를 50개 작성했어요", "pro-reviewer.svg", Gold, Activity),
    // Activity: tags
    def("태그 입문자", "첫 번째 태그를 만들었어요", "tag-novice.svg", Bronze, Activity),
    def("태그 수집가", "태그를 10개 만들었어요", "tag-collector.svg", Silver, Activity),
    def("태그 장인", "태그를 30개 만들었어요", "tag-artisan.svg", Gold, Activity),
    // Activity: roulette
    def("룰렛 초보", "룰렛을 10번 돌렸어요", "roulette-1.svg", Bronze, Activity),
    def("룰렛 애호가", "룰렛을 50번 돌렸어요", "roulette-2.svg", Silver, Activity),
    def("룰렛 마스터", "룰렛을 200번 돌렸어요", "roulette-3.svg", Gold, Activity),
    // Reputation: review upvotes
    def("주목받는 리뷰", "추천 10개를 받은 리뷰가 있어요", "review-like-1.svg", Bronze, Reputation),
    def("인기 리뷰", "추천 50개를 받은 리뷰가 있어요", "review-like-2.svg", Silver, Reputation),
    def("전설의 리뷰", "추천 100개를 받은 리뷰가 있어요", "review-like-3.svg", Gold, Reputation),
    // Reputation: tag upvotes
    def("호평받는 태그", "추천 10개를 받은 태그가 있어요", "tag-like-1.svg", Bronze, Reputation),
    def("사랑받는 태그", "추천 50개를 받은 태그가 있어요", "tag-like-2.svg", Silver, Reputation),
    def("명예의 태그", "추천 100개를 받은 태그가 있어요", "tag-like-3.svg", Gold, Reputation),
    // Reputation: tag subscribers
    def("떠오르는 큐레이터", "구독자 10명을 모은 태그가 있어요", "curator-1.svg", Bronze, Reputation),
    def("인기 큐레이터", "구독자 25명을 모은 태그가 있어요", "curator-2.svg", Silver, Reputation),
    def("스타 큐레이터", "구독자 50명을 모은 태그가 있어요", "curator-3.svg", Gold, Reputation),
    // Collection: subscriptions held
    def("첫 구독", "처음으로 태그를 구독했어요", "subscribe-1.svg", Bronze, Collection),
    def("구독 수집가", "태그를 10개 구독했어요", "subscribe-2.svg", Silver, Collection),
    def("컬렉션 마니아", "태그를 30개 구독했어요", "subscribe-3.svg", Gold, Collection),
    // Mastery: gold badges held
    def("골드 콜렉터", "골드 배지를 처음 획득했어요", "mastery-1.svg", BadgeTier::Special, Mastery),
    def("골드 헌터", "골드 배지를 3개 모았어요", "mastery-2.svg", BadgeTier::Special, Mastery),
    def("그랜드 마스터", "골드 배지를 7개 모았어요", "mastery-3.svg", BadgeTier::Special, Mastery),
    // Special
    def(TAG_RANK_BADGE, "구독자 수 1위 태그를 만들었어요", "tag-rank-1.svg", BadgeTier::Special, Special),
];

/// Look up a seed definition by its exact name
pub fn definition(name: &str) -> Option<&'static BadgeDefinition> {
    CATALOG.iter().find(|d| d.name == name)
}
