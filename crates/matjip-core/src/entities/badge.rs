//! Badge entity - an immutable catalog entry users can earn

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Badge rarity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Special,
}

impl BadgeTier {
    pub const ALL: [BadgeTier; 4] = [Self::Bronze, Self::Silver, Self::Gold, Self::Special];

    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Special => "SPECIAL",
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTier(s.to_string()))
    }
}

/// Badge grouping shown on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeCategory {
    Activity,
    Reputation,
    Collection,
    Mastery,
    Special,
}

impl BadgeCategory {
    pub const ALL: [BadgeCategory; 5] = [
        Self::Activity,
        Self::Reputation,
        Self::Collection,
        Self::Mastery,
        Self::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activity => "ACTIVITY",
            Self::Reputation => "REPUTATION",
            Self::Collection => "COLLECTION",
            Self::Mastery => "MASTERY",
            Self::Special => "SPECIAL",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

/// Badge entity as stored in the catalog table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: BadgeTier,
    pub category: BadgeCategory,
}

impl Badge {
    /// Materialize a seed definition under the given id
    pub fn from_definition(id: Snowflake, definition: &BadgeDefinition) -> Self {
        Self {
            id,
            name: definition.name.to_string(),
            description: definition.description.to_string(),
            icon: definition.icon.to_string(),
            tier: definition.tier,
            category: definition.category,
        }
    }

    #[inline]
    pub fn is_gold(&self) -> bool {
        self.tier == BadgeTier::Gold
    }
}

/// Static seed entry for a badge; the catalog table is populated from these
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tier: BadgeTier,
    pub category: BadgeCategory,
}
