use std::collections::BTreeSet;

use crate::catalog::Item;
use crate::types::identifiers::ItemId;

/// An item that survived filtering, with its catalog position.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub item: &'a Item,
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct FilterResult<'a> {
    pub candidates: Vec<Candidate<'a>>,
    pub excluded_not_for_sale: usize,
    pub excluded_purchased: usize,
}

/// Drop items that are not for sale or already owned.
///
/// Catalog order is preserved. Availability is checked first, so an item
/// that is both unsellable and purchased counts as not for sale.
pub fn filter_candidates<'a>(items: &'a [Item], excluded: &BTreeSet<ItemId>) -> FilterResult<'a> {
    let mut candidates = Vec::with_capacity(items.len());
    let mut excluded_not_for_sale = 0;
    let mut excluded_purchased = 0;

    for (position, item) in items.iter().enumerate() {
        if !item.availability().is_for_sale() {
            excluded_not_for_sale += 1;
        } else if excluded.contains(&item.id) {
            excluded_purchased += 1;
        } else {
            candidates.push(Candidate { item, position });
        }
    }

    FilterResult {
        candidates,
        excluded_not_for_sale,
        excluded_purchased,
    }
}
