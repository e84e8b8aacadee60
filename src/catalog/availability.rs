use serde::{Deserialize, Serialize};

use super::item::Edition;

/// Sale status of an edition, and of an item once aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    PreOrder,
    Available,
    Discontinued,
    NotForSale,
}

impl Availability {
    pub fn is_for_sale(self) -> bool {
        self != Availability::NotForSale
    }
}

/// Reduce edition states to the item-level state.
///
/// First match wins: pre-order, then available, then discontinued.
/// Anything else, including an item with no editions, is not for sale.
pub fn aggregate_availability(editions: &[Edition]) -> Availability {
    let any = |wanted: Availability| editions.iter().any(|e| e.availability == wanted);

    if any(Availability::PreOrder) {
        Availability::PreOrder
    } else if any(Availability::Available) {
        Availability::Available
    } else if any(Availability::Discontinued) {
        Availability::Discontinued
    } else {
        Availability::NotForSale
    }
}
