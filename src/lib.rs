//! Deterministic, explainable catalog recommendations.
//!
//! `catalog-recs` ranks catalog items for a member from their favorite tags,
//! favorite platforms and purchase history. Unsellable and already-owned items
//! are filtered out, the rest are scored by counting matched favorites, and
//! ties keep catalog order. Identical inputs always produce identical outputs.
//!
//! The engine does no I/O. Callers fetch a [`catalog::CatalogSnapshot`] and a
//! [`profile::PreferenceProfile`] from their own stores and hand the resulting
//! [`types::Recommendation`] to their presentation layer.

pub mod catalog;
pub mod config;
pub mod profile;
pub mod selection;
pub mod types;
