//! Built-in demonstration records.

use stockbook_core::{Clock, IdGenerator};

use crate::catalog::{Category, Condition, Status, Unit};
use crate::item::{InventoryItem, ItemDraft};

struct SampleRow {
    number: &'static str,
    name: &'static str,
    category: Category,
    sub_category: &'static str,
    quantity: i64,
    unit: Unit,
    condition: Condition,
    status: Status,
}

const SAMPLE_ROWS: &[SampleRow] = &[
    SampleRow {
        number: "EM/02/2026/001",
        name: "Laptop ASUS VivoBook",
        category: Category::Electronics,
        sub_category: "Laptop",
        quantity: 5,
        unit: Unit::Unit,
        condition: Condition::Good,
        status: Status::Present,
    },
    SampleRow {
        number: "EM/02/2026/002",
        name: "Mouse Logitech M331",
        category: Category::Electronics,
        sub_category: "Mouse",
        quantity: 20,
        unit: Unit::Pcs,
        condition: Condition::Good,
        status: Status::Present,
    },
    SampleRow {
        number: "EM/02/2026/003",
        name: "Piring Keramik Putih",
        category: Category::Tableware,
        sub_category: "Piring",
        quantity: 50,
        unit: Unit::Pcs,
        condition: Condition::Good,
        status: Status::Present,
    },
    SampleRow {
        number: "EM/02/2026/004",
        name: "Bolpoin Pilot",
        category: Category::Stationery,
        sub_category: "Bolpoin",
        quantity: 100,
        unit: Unit::Pcs,
        condition: Condition::Good,
        status: Status::Present,
    },
    SampleRow {
        number: "EM/02/2026/005",
        name: "Sendok Stainless Steel",
        category: Category::Tableware,
        sub_category: "Sendok",
        quantity: 30,
        unit: Unit::Pcs,
        condition: Condition::LightlyDamaged,
        status: Status::Present,
    },
    SampleRow {
        number: "EM/01/2026/001",
        name: "Keyboard Mechanical",
        category: Category::Electronics,
        sub_category: "Keyboard",
        quantity: 2,
        unit: Unit::Pcs,
        condition: Condition::HeavilyDamaged,
        status: Status::Missing,
    },
];

/// The six seed items, stamped with fresh ids and the clock's current time.
///
/// Their numbers are fixed (`EM/..`), independent of the configured prefix.
pub fn sample_items(ids: &dyn IdGenerator, clock: &dyn Clock) -> Vec<InventoryItem> {
    let now = clock.now();
    SAMPLE_ROWS
        .iter()
        .map(|row| {
            let draft = ItemDraft::new(row.name, row.category)
                .with_sub_category(row.sub_category)
                .with_quantity(row.quantity)
                .with_unit(row.unit)
                .with_condition(row.condition)
                .with_status(row.status);
            let number = row.number.to_string();
            InventoryItem::from_draft(ids.next_id(), number, row.category, draft, now)
        })
        .collect()
}
