use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::history::PurchaseHistory;
use crate::catalog::CatalogSnapshot;
use crate::config::RecommendConfig;
use crate::types::identifiers::{ItemId, MemberId, PlatformId, TagId};

/// A member's stated favorites plus the items they already own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    pub member: MemberId,
    #[serde(default)]
    pub favorite_tags: BTreeSet<TagId>,
    #[serde(default)]
    pub favorite_platforms: BTreeSet<PlatformId>,
    #[serde(default)]
    pub purchased: BTreeSet<ItemId>,
}

impl PreferenceProfile {
    pub fn new(member: impl Into<MemberId>) -> Self {
        Self {
            member: member.into(),
            favorite_tags: BTreeSet::new(),
            favorite_platforms: BTreeSet::new(),
            purchased: BTreeSet::new(),
        }
    }

    /// Build a profile whose purchased set is derived from `history`.
    pub fn from_history(
        favorite_tags: impl IntoIterator<Item = TagId>,
        favorite_platforms: impl IntoIterator<Item = PlatformId>,
        history: &PurchaseHistory,
        catalog: &CatalogSnapshot,
        config: &RecommendConfig,
    ) -> Self {
        Self {
            member: history.member().clone(),
            favorite_tags: favorite_tags.into_iter().collect(),
            favorite_platforms: favorite_platforms.into_iter().collect(),
            purchased: history.purchased_items(catalog, config.purchase_policy),
        }
    }

    pub fn with_favorite_tag(mut self, tag: impl Into<TagId>) -> Self {
        self.favorite_tags.insert(tag.into());
        self
    }

    pub fn with_favorite_platform(mut self, platform: impl Into<PlatformId>) -> Self {
        self.favorite_platforms.insert(platform.into());
        self
    }

    pub fn with_purchased(mut self, item: impl Into<ItemId>) -> Self {
        self.purchased.insert(item.into());
        self
    }

    /// No stated favorites at all. Purchases alone do not count.
    pub fn has_no_preferences(&self) -> bool {
        self.favorite_tags.is_empty() && self.favorite_platforms.is_empty()
    }
}
