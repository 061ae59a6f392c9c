//! Inventory domain module.
//!
//! An in-memory item registry with month-scoped sequential item numbers,
//! search/filter views and summary figures. Pure domain logic: no IO, no
//! persistence, no threads.

pub mod catalog;
pub mod config;
pub mod event;
pub mod filter;
pub mod form;
pub mod item;
pub mod number;
pub mod registry;
pub mod sample;
pub mod stats;

pub use catalog::{Category, Condition, Status, Unit};
pub use config::RegistryConfig;
pub use event::InventoryEvent;
pub use filter::{CategoryFilter, StatusFilter, ViewFilter, derive_view};
pub use form::ItemForm;
pub use item::{InventoryItem, ItemDraft, ItemPatch, coerce_quantity};
pub use number::{ItemNumber, month_prefix, next_item_number};
pub use registry::InventoryRegistry;
pub use sample::sample_items;
pub use stats::InventoryStats;
