pub mod history;
pub mod preferences;

pub use crate::types::identifiers::{MemberId, OrderId};
pub use history::{LineItem, Order, OrderStatus, ProfileError, PurchaseHistory};
pub use preferences::PreferenceProfile;
