//! Change notifications published by the registry.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockbook_core::ItemId;
use stockbook_events::Event;

use crate::item::InventoryItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InventoryEvent {
    ItemAdded(InventoryItem),
    /// Carries the item as it looks after the update.
    ItemUpdated(InventoryItem),
    ItemRemoved {
        id: ItemId,
        item_number: String,
        occurred_at: DateTime<Utc>,
    },
}

impl InventoryEvent {
    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryEvent::ItemAdded(item) | InventoryEvent::ItemUpdated(item) => item.id_typed(),
            InventoryEvent::ItemRemoved { id, .. } => *id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemUpdated(_) => "inventory.item.updated",
            InventoryEvent::ItemRemoved { .. } => "inventory.item.removed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(item) => item.created_at(),
            InventoryEvent::ItemUpdated(item) => item.updated_at(),
            InventoryEvent::ItemRemoved { occurred_at, .. } => *occurred_at,
        }
    }
}
