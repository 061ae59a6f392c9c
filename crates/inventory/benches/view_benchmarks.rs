use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::{TimeZone, Utc};
use stockbook_core::{ManualClock, SequentialIdGenerator};
use stockbook_inventory::{
    Category, InventoryRegistry, ItemDraft, RegistryConfig, Status, ViewFilter, derive_view,
};

fn populated(n: usize) -> InventoryRegistry {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
    let mut registry = InventoryRegistry::with_services(
        RegistryConfig::default(),
        SequentialIdGenerator::new(),
        clock,
    );
    for i in 0..n {
        let category = Category::ALL[i % Category::ALL.len()];
        let status = if i % 7 == 0 { Status::Missing } else { Status::Present };
        registry.add(ItemDraft::new(format!("Item {i}"), category).with_status(status));
    }
    registry
}

fn bench_derive_view(c: &mut Criterion) {
    let registry = populated(2_000);
    let filter = ViewFilter::new()
        .with_search("item 1")
        .with_category(Category::Electronics)
        .with_status(Status::Present);

    c.bench_function("derive_view_2000_items", |b| {
        b.iter(|| derive_view(black_box(registry.items()), black_box(&filter)))
    });
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_500_items", |b| b.iter(|| populated(black_box(500))));
}

criterion_group!(benches, bench_derive_view, bench_add);
criterion_main!(benches);
