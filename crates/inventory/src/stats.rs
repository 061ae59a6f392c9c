//! Aggregate figures shown above the item list.

use serde::Serialize;

use crate::catalog::Status;
use crate::item::InventoryItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    /// Number of distinct items.
    pub total_items: usize,
    /// Sum of all quantities.
    pub total_quantity: u64,
    pub missing_items: usize,
    /// Items in any condition other than good.
    pub damaged_items: usize,
}

impl InventoryStats {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.total_items += 1;
            acc.total_quantity += u64::from(item.quantity());
            if item.status() == Status::Missing {
                acc.missing_items += 1;
            }
            if item.condition().is_damaged() {
                acc.damaged_items += 1;
            }
            acc
        })
    }
}
