pub mod availability;
pub mod item;
pub mod snapshot;

pub use crate::types::identifiers::{ItemId, PlatformId, Sku, SnapshotVersion, TagId};
pub use availability::{aggregate_availability, Availability};
pub use item::{Edition, Item};
pub use snapshot::{CatalogSnapshot, SnapshotError};
