use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{Entity, ItemId};

use crate::catalog::{Category, Condition, Status, Unit};

/// Smallest quantity an item may hold.
pub const MIN_QUANTITY: u32 = 1;

/// Coerce a raw quantity into the valid range (`>= 1`).
///
/// Zero and negative input become `MIN_QUANTITY` rather than being rejected.
pub fn coerce_quantity(raw: i64) -> u32 {
    if raw < i64::from(MIN_QUANTITY) {
        MIN_QUANTITY
    } else {
        u32::try_from(raw).unwrap_or(u32::MAX)
    }
}

/// A physical inventory item as held by the registry.
///
/// Identity fields (`id`, `item_number`, `created_at`) are fixed at creation;
/// everything else changes only through [`ItemPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    id: ItemId,
    item_number: String,
    name: String,
    category: Category,
    sub_category: String,
    quantity: u32,
    unit: Unit,
    condition: Condition,
    status: Status,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Build a new item from a draft whose category was already checked.
    pub(crate) fn from_draft(
        id: ItemId,
        item_number: String,
        category: Category,
        draft: ItemDraft,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_number,
            name: draft.name,
            category,
            sub_category: draft.sub_category,
            quantity: coerce_quantity(draft.quantity),
            unit: draft.unit,
            condition: draft.condition,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn item_number(&self) -> &str {
        &self.item_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrite the fields present in `patch` and refresh `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock does.
    pub(crate) fn apply_patch(&mut self, patch: ItemPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(sub_category) = patch.sub_category {
            self.sub_category = sub_category;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = coerce_quantity(quantity);
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now.max(self.created_at);
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for creating an item: every field except the ones the registry assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    /// `None` models an input surface where no category was picked yet.
    pub category: Option<Category>,
    pub sub_category: String,
    pub quantity: i64,
    pub unit: Unit,
    pub condition: Condition,
    pub status: Status,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: None,
            sub_category: String::new(),
            quantity: i64::from(MIN_QUANTITY),
            unit: Unit::default(),
            condition: Condition::default(),
            status: Status::default(),
        }
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub sub_category: Option<String>,
    pub quantity: Option<i64>,
    pub unit: Option<Unit>,
    pub condition: Option<Condition>,
    pub status: Option<Status>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use stockbook_core::{IdGenerator, SequentialIdGenerator};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 3, 8, 0, 0).unwrap()
    }

    fn laptop() -> InventoryItem {
        let draft = ItemDraft::new("Laptop ASUS", Category::Electronics)
            .with_sub_category("Laptop")
            .with_quantity(5)
            .with_unit(Unit::Unit);
        InventoryItem::from_draft(
            SequentialIdGenerator::new().next_id(),
            "EM/02/2026/001".to_string(),
            Category::Electronics,
            draft,
            at(),
        )
    }

    #[test]
    fn quantity_coercion_clamps_to_the_valid_range() {
        assert_eq!(coerce_quantity(-4), 1);
        assert_eq!(coerce_quantity(0), 1);
        assert_eq!(coerce_quantity(1), 1);
        assert_eq!(coerce_quantity(250), 250);
        assert_eq!(coerce_quantity(i64::MAX), u32::MAX);
    }

    #[test]
    fn draft_defaults_match_the_input_form() {
        let draft = ItemDraft::default();
        assert_eq!(draft.category, None);
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.unit, Unit::Pcs);
        assert_eq!(draft.condition, Condition::Good);
        assert_eq!(draft.status, Status::Present);
    }

    #[test]
    fn new_item_has_equal_timestamps() {
        let item = laptop();
        assert_eq!(item.created_at(), item.updated_at());
        assert_eq!(item.quantity(), 5);
        assert_eq!(item.sub_category(), "Laptop");
        assert_eq!(Entity::id(&item), &item.id_typed());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut item = laptop();
        let before = item.clone();
        let later = at() + Duration::hours(1);

        item.apply_patch(ItemPatch::new().status(Status::Missing).quantity(0), later);

        assert_eq!(item.status(), Status::Missing);
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.name(), before.name());
        assert_eq!(item.item_number(), before.item_number());
        assert_eq!(item.created_at(), before.created_at());
        assert_eq!(item.updated_at(), later);
    }

    #[test]
    fn blank_name_in_patch_is_ignored() {
        let mut item = laptop();
        item.apply_patch(ItemPatch::new().name("   "), at());
        assert_eq!(item.name(), "Laptop ASUS");
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let mut item = laptop();
        item.apply_patch(ItemPatch::new(), at() - Duration::days(1));
        assert_eq!(item.updated_at(), item.created_at());
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(ItemPatch::new().is_empty());
        assert!(!ItemPatch::new().unit(Unit::Box).is_empty());
    }
}
