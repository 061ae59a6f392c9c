//! Editing surface state for creating and editing items.
//!
//! The registry accepts any subcategory string; this form is where the
//! "subcategory belongs to its category" rule is enforced.

use stockbook_core::{DomainError, DomainResult};

use crate::catalog::{Category, Condition, Status, Unit};
use crate::item::{InventoryItem, ItemDraft, ItemPatch, MIN_QUANTITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    name: String,
    category: Option<Category>,
    sub_category: String,
    quantity: i64,
    unit: Unit,
    condition: Condition,
    status: Status,
}

impl Default for ItemForm {
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

impl ItemForm {
    /// Blank form for a new item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing item, for editing.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name().to_string(),
            category: Some(item.category()),
            sub_category: item.sub_category().to_string(),
            quantity: i64::from(item.quantity()),
            unit: item.unit(),
            condition: item.condition(),
            status: item.status(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Pick a category. Changing it clears the subcategory.
    pub fn set_category(&mut self, category: Category) {
        if self.category != Some(category) {
            self.sub_category.clear();
        }
        self.category = Some(category);
    }

    /// Pick a subcategory from the current category's list.
    pub fn set_sub_category(&mut self, sub_category: &str) -> DomainResult<()> {
        let Some(category) = self.category else {
            return Err(DomainError::validation(
                "choose a category before a subcategory",
            ));
        };
        if !category.allows_sub_category(sub_category) {
            return Err(DomainError::unknown("sub_category", sub_category));
        }
        self.sub_category = sub_category.to_string();
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Subcategories the picker should offer right now.
    pub fn available_sub_categories(&self) -> &'static [&'static str] {
        self.category.map(Category::sub_categories).unwrap_or(&[])
    }

    /// Whether submitting would produce anything.
    pub fn is_submittable(&self) -> bool {
        self.category.is_some() && !self.name.trim().is_empty()
    }

    /// Produce a draft for the registry, or `None` while the form is incomplete
    /// (the caller keeps the form open).
    pub fn submit(&self) -> Option<ItemDraft> {
        if !self.is_submittable() {
            return None;
        }
        Some(ItemDraft {
            name: self.name.clone(),
            category: self.category,
            sub_category: self.sub_category.clone(),
            quantity: self.quantity,
            unit: self.unit,
            condition: self.condition,
            status: self.status,
        })
    }

    /// Produce a full-field patch for an edit submission.
    pub fn to_patch(&self) -> Option<ItemPatch> {
        let category = self.category.filter(|_| self.is_submittable())?;
        Some(ItemPatch {
            name: Some(self.name.clone()),
            category: Some(category),
            sub_category: Some(self.sub_category.clone()),
            quantity: Some(self.quantity),
            unit: Some(self.unit),
            condition: Some(self.condition),
            status: Some(self.status),
        })
    }
}
