use tracing::trace;

use super::filters::Candidate;
use crate::catalog::Item;
use crate::profile::PreferenceProfile;
use crate::types::recommendation::{ScoreDetails, ScoredCandidate};

pub trait Scorer: Send + Sync {
    fn score(&self, item: &Item, profile: &PreferenceProfile) -> ScoreDetails;

    /// One point per matched tag plus one per matched distinct platform.
    fn score_value(&self, details: &ScoreDetails) -> usize {
        details.matched_tags.len() + details.matched_platforms.len()
    }
}

/// v0: unweighted count of favorite tags and platforms an item matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreferenceMatchScorer;

impl Scorer for PreferenceMatchScorer {
    fn score(&self, item: &Item, profile: &PreferenceProfile) -> ScoreDetails {
        let matched_tags = item
            .tags
            .intersection(&profile.favorite_tags)
            .cloned()
            .collect();

        // platforms() is already deduplicated across editions
        let matched_platforms = item
            .platforms()
            .into_iter()
            .filter(|p| profile.favorite_platforms.contains(*p))
            .cloned()
            .collect();

        ScoreDetails {
            matched_tags,
            matched_platforms,
        }
    }
}

/// Score of `item` under the default scorer.
pub fn score(item: &Item, profile: &PreferenceProfile) -> usize {
    let scorer = PreferenceMatchScorer;
    scorer.score_value(&scorer.score(item, profile))
}

#[derive(Debug, Clone)]
pub struct RankResult<'a> {
    pub ranked: Vec<ScoredCandidate<'a>>,
    pub excluded_zero_score: usize,
}

/// Score, drop zero scores, then order by score descending.
///
/// Equal scores keep their input order; the catalog position is the
/// secondary key so the result never depends on sort stability.
pub fn rank<'a, S: Scorer>(
    scorer: &S,
    candidates: Vec<Candidate<'a>>,
    profile: &PreferenceProfile,
) -> RankResult<'a> {
    let considered = candidates.len();

    let mut ranked: Vec<ScoredCandidate<'a>> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let details = scorer.score(candidate.item, profile);
            let score = scorer.score_value(&details);
            trace!(item = %candidate.item.id, score, "scored candidate");
            (score > 0).then_some(ScoredCandidate {
                item: candidate.item,
                position: candidate.position,
                score,
                details,
            })
        })
        .collect();

    // Sort by (score desc, position asc)
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.position.cmp(&b.position)));

    debug_assert!(ranked.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.score > b.score || (a.score == b.score && a.position < b.position)
    }));

    RankResult {
        excluded_zero_score: considered - ranked.len(),
        ranked,
    }
}
