use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::types::identifiers::{ItemId, PlatformId, SnapshotVersion, TagId};

/// Outcome handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Recommendation {
    /// The member stated no preferences. The caller shows its default,
    /// unfiltered listing instead.
    Bypass,
    /// Ordered best match first. May be empty.
    Ranked(RankedRecommendations),
}

impl Recommendation {
    pub fn is_bypass(&self) -> bool {
        matches!(self, Recommendation::Bypass)
    }

    pub fn ranked(&self) -> Option<&RankedRecommendations> {
        match self {
            Recommendation::Bypass => None,
            Recommendation::Ranked(ranked) => Some(ranked),
        }
    }

    /// Ranked ids in output order; `None` on bypass.
    pub fn item_ids(&self) -> Option<Vec<&ItemId>> {
        self.ranked()
            .map(|ranked| ranked.items.iter().map(|i| &i.id).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRecommendations {
    pub items: Vec<RankedItem>,
    pub summary: RankingSummary,
}

/// A recommended item, self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem {
    pub id: ItemId,
    pub name: String,
    pub score: usize,
    pub catalog_position: usize,
    pub why: ScoreDetails,
}

/// Which favorites an item matched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub matched_tags: Vec<TagId>,
    pub matched_platforms: Vec<PlatformId>,
}

/// Counts describing how the candidate set was narrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub snapshot_version: SnapshotVersion,
    pub items_considered: usize,
    pub excluded_not_for_sale: usize,
    pub excluded_purchased: usize,
    pub excluded_zero_score: usize,
    pub items_ranked: usize,
}

/// A filtered item with its score, borrowed from the snapshot.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub item: &'a Item,
    pub position: usize,
    pub score: usize,
    pub details: ScoreDetails,
}

impl ScoredCandidate<'_> {
    pub fn into_ranked(self) -> RankedItem {
        RankedItem {
            id: self.item.id.clone(),
            name: self.item.name.clone(),
            score: self.score,
            catalog_position: self.position,
            why: self.details,
        }
    }
}
