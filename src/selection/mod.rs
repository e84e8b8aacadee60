pub mod filters;
pub mod ranking;

use tracing::{debug, debug_span};

use crate::catalog::CatalogSnapshot;
use crate::profile::PreferenceProfile;
use crate::types::recommendation::{RankedRecommendations, RankingSummary, Recommendation};
pub use filters::{filter_candidates, Candidate, FilterResult};
pub use ranking::{rank, score, PreferenceMatchScorer, RankResult, Scorer};

/// Stateless orchestrator: bypass check, filter, score, rank.
pub struct RecommendationEngine<S> {
    scorer: S,
}

impl Default for RecommendationEngine<PreferenceMatchScorer> {
    fn default() -> Self {
        Self {
            scorer: PreferenceMatchScorer,
        }
    }
}

impl<S> RecommendationEngine<S>
where
    S: Scorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn recommend(
        &self,
        catalog: &CatalogSnapshot,
        profile: &PreferenceProfile,
    ) -> Recommendation {
        let span = debug_span!(
            "recommend",
            member = %profile.member,
            catalog_items = catalog.len()
        );
        let _enter = span.enter();

        // 0. No stated preferences: do not recommend at all
        if profile.has_no_preferences() {
            debug!("member has no favorite tags or platforms, bypassing");
            return Recommendation::Bypass;
        }

        // 1. Filtering Phase
        let FilterResult {
            candidates,
            excluded_not_for_sale,
            excluded_purchased,
        } = filter_candidates(catalog.items(), &profile.purchased);

        // 2. Scoring and Ordering Phase
        let RankResult {
            ranked,
            excluded_zero_score,
        } = rank(&self.scorer, candidates, profile);

        let summary = RankingSummary {
            snapshot_version: catalog.version().clone(),
            items_considered: catalog.len(),
            excluded_not_for_sale,
            excluded_purchased,
            excluded_zero_score,
            items_ranked: ranked.len(),
        };

        debug!(
            excluded_not_for_sale,
            excluded_purchased,
            excluded_zero_score,
            items_ranked = summary.items_ranked,
            "ranking complete"
        );

        Recommendation::Ranked(RankedRecommendations {
            items: ranked.into_iter().map(|c| c.into_ranked()).collect(),
            summary,
        })
    }
}
