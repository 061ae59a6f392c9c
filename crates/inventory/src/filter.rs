//! Search and filter predicates over the item collection.

use crate::catalog::{Category, Status};
use crate::item::InventoryItem;

/// Category filter: everything, or a single category.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

/// Status filter: everything, or a single status.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(value: Status) -> Self {
        StatusFilter::Only(value)
    }
}

/// The three inputs that shape the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl ViewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = status.into();
        self
    }

    /// True when the filter lets every item through.
    pub fn is_pass_through(&self) -> bool {
        self.search.is_empty()
            && self.category == CategoryFilter::All
            && self.status == StatusFilter::All
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.matches_with_needle(item, &self.search.to_lowercase())
    }

    fn matches_with_needle(&self, item: &InventoryItem, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || item.name().to_lowercase().contains(needle)
            || item.item_number().to_lowercase().contains(needle);

        matches_search
            && self.category.matches(item.category())
            && self.status.matches(item.status())
    }
}

/// Order-preserving filtered copy of `items`.
///
/// Pure: never reorders or mutates its input, and applying it to its own output
/// with the same filter yields the same sequence.
pub fn derive_view(items: &[InventoryItem], filter: &ViewFilter) -> Vec<InventoryItem> {
    let needle = filter.search.to_lowercase();
    items
        .iter()
        .filter(|item| filter.matches_with_needle(item, &needle))
        .cloned()
        .collect()
}
