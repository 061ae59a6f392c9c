//! The item registry: sole owner of the in-memory item collection.
//!
//! Every effective mutation builds a new collection and swaps it in. Snapshots
//! handed out earlier through [`InventoryRegistry::snapshot`] keep showing the
//! state they were taken from.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use stockbook_core::{Clock, IdGenerator, ItemId, SystemClock, UuidV7Generator};
use stockbook_events::{EventBus, InMemoryEventBus, Subscription};

use crate::config::RegistryConfig;
use crate::event::InventoryEvent;
use crate::filter::{CategoryFilter, StatusFilter, ViewFilter, derive_view};
use crate::item::{InventoryItem, ItemDraft, ItemPatch};
use crate::number::{ItemNumber, next_item_number};
use crate::sample::sample_items;
use crate::stats::InventoryStats;

pub struct InventoryRegistry {
    items: Arc<Vec<InventoryItem>>,
    filter: ViewFilter,
    config: RegistryConfig,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    changes: InMemoryEventBus<InventoryEvent>,
}

impl core::fmt::Debug for InventoryRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryRegistry")
            .field("items", &self.items.len())
            .field("filter", &self.filter)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for InventoryRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl InventoryRegistry {
    /// Registry backed by UUIDv7 ids and the system clock.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_services(config, UuidV7Generator, SystemClock)
    }

    /// Registry with explicit id and time sources.
    pub fn with_services<G, C>(config: RegistryConfig, ids: G, clock: C) -> Self
    where
        G: IdGenerator + 'static,
        C: Clock + 'static,
    {
        let items = if config.seed_sample_items {
            sample_items(&ids, &clock)
        } else {
            Vec::new()
        };
        debug!(
            prefix = %config.number_prefix,
            seeded = items.len(),
            "inventory registry created"
        );

        Self {
            items: Arc::new(items),
            filter: ViewFilter::default(),
            config,
            ids: Box::new(ids),
            clock: Box::new(clock),
            changes: InMemoryEventBus::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The full collection, in insertion order.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Shared handle on the current collection. Later mutations do not affect it.
    pub fn snapshot(&self) -> Arc<Vec<InventoryItem>> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ItemId) -> Option<&InventoryItem> {
        self.position(id).map(|idx| &self.items[idx])
    }

    /// Subscribe to change notifications for every effective mutation.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.changes.subscribe()
    }

    /// Preview the number the next added item will receive.
    ///
    /// Asking twice without adding in between returns the same number both
    /// times; only show one preview per add. `None` when no number can be
    /// formed (an invalid configured prefix).
    pub fn next_item_number(&self) -> Option<String> {
        let number = self.compute_next_number(self.clock.now())?.to_string();
        debug!(item_number = %number, "item number preview");
        Some(number)
    }

    /// Create an item from `draft`.
    ///
    /// Returns `None` (and leaves the collection untouched) when the draft has
    /// no category or a blank name, or no item number can be formed.
    /// Out-of-range quantities are coerced to 1.
    pub fn add(&mut self, draft: ItemDraft) -> Option<InventoryItem> {
        let Some(category) = draft.category else {
            debug!(name = %draft.name, "add rejected: category missing");
            return None;
        };
        if draft.name.trim().is_empty() {
            debug!("add rejected: name is blank");
            return None;
        }

        let now = self.clock.now();
        let item_number = self.compute_next_number(now)?.to_string();
        if self.items.iter().any(|i| i.item_number() == item_number) {
            // Count-based numbering reuses a number once an item of the same
            // month has been removed.
            warn!(item_number = %item_number, "generated item number is already taken");
        }

        let item = InventoryItem::from_draft(self.ids.next_id(), item_number, category, draft, now);

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.extend(self.items.iter().cloned());
        next.push(item.clone());
        self.items = Arc::new(next);

        info!(
            item_id = %item.id_typed(),
            item_number = %item.item_number(),
            category = %item.category(),
            "inventory item added"
        );
        self.publish(InventoryEvent::ItemAdded(item.clone()));
        Some(item)
    }

    /// Overwrite the fields present in `patch` on the item with `id`.
    ///
    /// Unknown ids are ignored. Identity fields cannot be patched.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) {
        let Some(idx) = self.position(id) else {
            debug!(item_id = %id, "update ignored: no such item");
            return;
        };

        let now = self.clock.now();
        let mut next = Vec::clone(&self.items);
        next[idx].apply_patch(patch, now);
        let updated = next[idx].clone();
        self.items = Arc::new(next);

        debug!(item_id = %id, item_number = %updated.item_number(), "inventory item updated");
        self.publish(InventoryEvent::ItemUpdated(updated));
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) {
        let Some(idx) = self.position(id) else {
            debug!(item_id = %id, "remove ignored: no such item");
            return;
        };

        let mut next = Vec::clone(&self.items);
        let removed = next.remove(idx);
        self.items = Arc::new(next);

        info!(item_id = %id, item_number = %removed.item_number(), "inventory item removed");
        self.publish(InventoryEvent::ItemRemoved {
            id,
            item_number: removed.item_number().to_string(),
            occurred_at: self.clock.now(),
        });
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search = query.into();
        debug!(search = %self.filter.search, "search query changed");
    }

    pub fn set_category_filter(&mut self, category: impl Into<CategoryFilter>) {
        self.filter.category = category.into();
        debug!(category = ?self.filter.category, "category filter changed");
    }

    pub fn set_status_filter(&mut self, status: impl Into<StatusFilter>) {
        self.filter.status = status.into();
        debug!(status = ?self.filter.status, "status filter changed");
    }

    pub fn clear_filters(&mut self) {
        self.filter = ViewFilter::default();
    }

    /// Items passing the current search and filters, in insertion order.
    pub fn view(&self) -> Vec<InventoryItem> {
        derive_view(&self.items, &self.filter)
    }

    /// Figures over the whole collection (filters do not apply).
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_items(&self.items)
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed() == id)
    }

    fn compute_next_number(&self, now: DateTime<Utc>) -> Option<ItemNumber> {
        let numbers = self.items.iter().map(InventoryItem::item_number);
        match next_item_number(numbers, &self.config.number_prefix, now) {
            Ok(number) => Some(number),
            Err(err) => {
                warn!(
                    error = %err,
                    prefix = %self.config.number_prefix,
                    "cannot form item number"
                );
                None
            }
        }
    }

    fn publish(&self, event: InventoryEvent) {
        if let Err(err) = self.changes.publish(event) {
            warn!(error = %err, "failed to publish inventory change");
        }
    }
}
