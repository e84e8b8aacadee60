use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::availability::{aggregate_availability, Availability};
use crate::types::identifiers::{ItemId, PlatformId, Sku, TagId};

/// A platform-specific, sellable variant of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub sku: Sku,
    pub platform: PlatformId,
    pub availability: Availability,
}

impl Edition {
    pub fn new(sku: impl Into<Sku>, platform: impl Into<PlatformId>, availability: Availability) -> Self {
        Self {
            sku: sku.into(),
            platform: platform.into(),
            availability,
        }
    }
}

/// A catalog product eligible for recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub tags: BTreeSet<TagId>,
    #[serde(default)]
    pub editions: Vec<Edition>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: BTreeSet::new(),
            editions: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<TagId>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_edition(mut self, edition: Edition) -> Self {
        self.editions.push(edition);
        self
    }

    /// Derived on every call; never stored on the item.
    pub fn availability(&self) -> Availability {
        aggregate_availability(&self.editions)
    }

    /// Distinct platforms across all editions.
    pub fn platforms(&self) -> BTreeSet<&PlatformId> {
        self.editions.iter().map(|e| &e.platform).collect()
    }
}
