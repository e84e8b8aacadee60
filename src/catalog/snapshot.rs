use std::collections::BTreeMap;
use std::io::{Read, Write};

use thiserror::Error;

use super::item::Item;
use crate::types::identifiers::{ItemId, Sku, SnapshotVersion};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Duplicate item ID: {0}")]
    DuplicateItemId(String),
    #[error("SKU {sku} is listed under both {first} and {second}")]
    DuplicateSku {
        sku: String,
        first: String,
        second: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Read-only view of the catalog for a single request.
///
/// Item order is the catalog's enumeration order and is the only
/// tie-break the ranker ever uses.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    items: Vec<Item>,
    by_id: BTreeMap<ItemId, usize>,
    by_sku: BTreeMap<Sku, usize>,
    version: SnapshotVersion,
}

impl CatalogSnapshot {
    /// Build a snapshot, assigning positions in input order.
    pub fn new(items: Vec<Item>) -> Result<Self, SnapshotError> {
        let mut by_id = BTreeMap::new();
        let mut by_sku: BTreeMap<Sku, usize> = BTreeMap::new();

        for (position, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), position).is_some() {
                return Err(SnapshotError::DuplicateItemId(item.id.as_str().to_string()));
            }

            for edition in &item.editions {
                match by_sku.get(&edition.sku) {
                    // Same SKU twice on one item is harmless
                    Some(&owner) if owner == position => {}
                    Some(&owner) => {
                        return Err(SnapshotError::DuplicateSku {
                            sku: edition.sku.as_str().to_string(),
                            first: items[owner].id.as_str().to_string(),
                            second: item.id.as_str().to_string(),
                        });
                    }
                    None => {
                        by_sku.insert(edition.sku.clone(), position);
                    }
                }
            }
        }

        let version = SnapshotVersion::from_content(&serde_json::to_vec(&items)?);

        Ok(Self {
            items,
            by_id,
            by_sku,
            version,
        })
    }

    /// Load a JSON array of items, in catalog order.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let items: Vec<Item> = serde_json::from_reader(reader)?;
        Self::new(items)
    }

    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), SnapshotError> {
        serde_json::to_writer_pretty(writer, &self.items)?;
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.by_id.get(id).map(|&pos| &self.items[pos])
    }

    /// Catalog position of an item, if present.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// The item owning a SKU. Order line items reference SKUs, not items.
    pub fn item_for_sku(&self, sku: &Sku) -> Option<&Item> {
        self.by_sku.get(sku).map(|&pos| &self.items[pos])
    }

    /// Content hash over the ordered items.
    ///
    /// Any change to order, tags, editions or availability changes the version.
    pub fn version(&self) -> &SnapshotVersion {
        &self.version
    }
}
