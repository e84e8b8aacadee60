pub mod identifiers;
pub mod recommendation;

pub use identifiers::{ItemId, MemberId, OrderId, PlatformId, Sku, SnapshotVersion, TagId};
pub use recommendation::{
    RankedItem, RankedRecommendations, RankingSummary, Recommendation, ScoreDetails,
    ScoredCandidate,
};
