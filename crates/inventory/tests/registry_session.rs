//! End-to-end walk through a session: seed, preview, add via the form, edit,
//! filter, delete, with change notifications observed along the way.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use stockbook_core::{ManualClock, SequentialIdGenerator};
use stockbook_events::Event;
use stockbook_inventory::{
    Category, CategoryFilter, Condition, InventoryEvent, InventoryRegistry, ItemForm,
    RegistryConfig, Status, StatusFilter,
};

fn seeded_registry() -> (InventoryRegistry, Arc<ManualClock>) {
    stockbook_observability::init();

    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 2, 20, 14, 0, 0).unwrap(),
    ));
    let config = RegistryConfig::from_lookup(|key| match key {
        "STOCKBOOK_SEED_SAMPLE" => Some("true".to_string()),
        _ => None,
    })
    .unwrap();
    let registry =
        InventoryRegistry::with_services(config, SequentialIdGenerator::new(), Arc::clone(&clock));
    (registry, clock)
}

#[test]
fn full_session_flow() {
    let (mut registry, clock) = seeded_registry();
    let changes = registry.subscribe();

    let stats = registry.stats();
    assert_eq!(stats.total_items, 6);
    assert_eq!(stats.total_quantity, 207);
    assert_eq!(stats.missing_items, 1);
    assert_eq!(stats.damaged_items, 2);

    // Preview, then add through the form.
    let preview = registry.next_item_number().unwrap();
    assert_eq!(preview, "EM/02/2026/006");

    let mut form = ItemForm::new();
    form.set_name("Gelas Kaca");
    assert!(form.submit().is_none());
    form.set_category(Category::Tableware);
    form.set_sub_category("Gelas").unwrap();
    form.set_quantity(12);
    let added = registry.add(form.submit().unwrap()).unwrap();
    assert_eq!(added.item_number(), preview);
    assert_eq!(registry.len(), 7);

    // Edit through the form: switching category clears the subcategory.
    clock.advance(Duration::hours(2));
    let mut edit = ItemForm::from_item(&added);
    edit.set_category(Category::OtherNonElectronic);
    assert_eq!(edit.sub_category(), "");
    edit.set_sub_category("Lainnya").unwrap();
    edit.set_condition(Condition::LightlyDamaged);
    registry.update(added.id_typed(), edit.to_patch().unwrap());

    let edited = registry.find(added.id_typed()).unwrap().clone();
    assert_eq!(edited.category(), Category::OtherNonElectronic);
    assert_eq!(edited.sub_category(), "Lainnya");
    assert_eq!(edited.item_number(), added.item_number());
    assert!(edited.updated_at() > edited.created_at());

    // Filtered views.
    registry.set_category_filter(Category::Electronics);
    assert_eq!(registry.view().len(), 3);
    registry.set_status_filter(Status::Missing);
    let missing: Vec<_> = registry.view().iter().map(|i| i.item_number().to_string()).collect();
    assert_eq!(missing, vec!["EM/01/2026/001"]);
    registry.set_category_filter(CategoryFilter::All);
    registry.set_status_filter(StatusFilter::All);
    registry.set_search_query("KACA");
    assert_eq!(registry.view(), vec![edited.clone()]);

    // Delete.
    registry.remove(added.id_typed());
    assert_eq!(registry.len(), 6);
    assert!(registry.view().is_empty());

    let kinds: Vec<_> = changes.drain().iter().map(Event::event_type).collect();
    assert_eq!(
        kinds,
        vec!["inventory.item.added", "inventory.item.updated", "inventory.item.removed"]
    );
}

#[test]
fn items_serialize_with_stable_names() {
    let (registry, _clock) = seeded_registry();
    let json = serde_json::to_value(&registry.items()[5]).unwrap();
    assert_eq!(json["item_number"], "EM/01/2026/001");
    assert_eq!(json["category"], "electronics");
    assert_eq!(json["condition"], "heavily_damaged");
    assert_eq!(json["status"], "missing");

    let event = InventoryEvent::ItemAdded(registry.items()[0].clone());
    assert_eq!(event.event_type(), "inventory.item.added");
}
