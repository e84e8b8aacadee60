use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::catalog::CatalogSnapshot;
use crate::config::PurchasePolicy;
use crate::types::identifiers::{ItemId, MemberId, OrderId, Sku};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Order {order} belongs to member {found}, expected {expected}")]
    MemberMismatch {
        order: String,
        expected: String,
        found: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// The order never resulted in a completed sale.
    pub fn is_voided(self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Refunded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub member: MemberId,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<LineItem>,
}

/// All orders of a single member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPurchaseHistory")]
pub struct PurchaseHistory {
    member: MemberId,
    orders: Vec<Order>,
}

// Deserialized shape, checked by PurchaseHistory::new before use.
#[derive(Deserialize)]
struct RawPurchaseHistory {
    member: MemberId,
    #[serde(default)]
    orders: Vec<Order>,
}

impl TryFrom<RawPurchaseHistory> for PurchaseHistory {
    type Error = ProfileError;

    fn try_from(raw: RawPurchaseHistory) -> Result<Self, Self::Error> {
        Self::new(raw.member, raw.orders)
    }
}

impl PurchaseHistory {
    /// Rejects orders placed by a different member.
    pub fn new(member: MemberId, orders: Vec<Order>) -> Result<Self, ProfileError> {
        if let Some(stray) = orders.iter().find(|o| o.member != member) {
            return Err(ProfileError::MemberMismatch {
                order: stray.id.as_str().to_string(),
                expected: member.as_str().to_string(),
                found: stray.member.as_str().to_string(),
            });
        }
        Ok(Self { member, orders })
    }

    pub fn empty(member: MemberId) -> Self {
        Self {
            member,
            orders: Vec::new(),
        }
    }

    pub fn member(&self) -> &MemberId {
        &self.member
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Items with at least one edition on a counted order.
    ///
    /// Recomputed on every call so it always reflects the current history.
    pub fn purchased_items(
        &self,
        catalog: &CatalogSnapshot,
        policy: PurchasePolicy,
    ) -> BTreeSet<ItemId> {
        let mut purchased = BTreeSet::new();

        for order in self.orders.iter().filter(|o| policy.counts(o.status)) {
            for line in &order.lines {
                match catalog.item_for_sku(&line.sku) {
                    Some(item) => {
                        purchased.insert(item.id.clone());
                    }
                    None => warn!(
                        member = %self.member,
                        order = %order.id,
                        sku = %line.sku,
                        "order line references a SKU missing from the catalog snapshot"
                    ),
                }
            }
        }

        purchased
    }
}
