// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use harvestbook::db;
use harvestbook::error::FarmError;
use harvestbook::models::{
    Category, Crop, CropStatus, ExpenseCategory, Farm, ImageRecord, InventoryItem, SizeUnit, Task,
    TaskType, Transaction,
};
use harvestbook::store::{MemoryStore, RecordStore, SqliteStore};
use rust_decimal::Decimal;

fn farm(name: &str) -> Farm {
    Farm {
        id: 0,
        name: name.into(),
        location: "Kansas".into(),
        size: Decimal::new(1205, 1),
        size_unit: SizeUnit::Hectares,
    }
}

fn crop(farm_id: i64, field: &str) -> Crop {
    Crop {
        id: 0,
        farm_id,
        crop_type: "Corn".into(),
        field: field.into(),
        planting_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        expected_harvest: NaiveDate::from_ymd_opt(2024, 7, 30).unwrap(),
        status: CropStatus::Planted,
        notes: Some("north side".into()),
    }
}

#[test]
fn sqlite_farm_crud() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);

    let a = store.create(farm("A")).unwrap();
    let b = store.create(farm("B")).unwrap();
    assert_eq!((a.id, b.id), (1, 2));

    let loaded: Farm = store.get_by_id(a.id).unwrap();
    assert_eq!(loaded, a);
    assert_eq!(loaded.size, Decimal::new(1205, 1));

    let renamed = store
        .update(b.id, Farm { name: "B2".into(), ..b.clone() })
        .unwrap();
    assert_eq!(renamed.name, "B2");

    RecordStore::<Farm>::delete(&mut store, a.id).unwrap();
    let all: Vec<Farm> = store.get_all().unwrap();
    assert_eq!(all, vec![renamed]);
}

#[test]
fn sqlite_missing_ids_are_not_found() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);
    let err = RecordStore::<Farm>::get_by_id(&store, 5).unwrap_err();
    assert!(matches!(err, FarmError::NotFound { entity: "Farm", id: 5 }));
    assert!(store.update(5, farm("X")).is_err());
    assert!(RecordStore::<Task>::delete(&mut store, 5).is_err());
}

#[test]
fn sqlite_transaction_keeps_time_and_images() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);
    let farm = store.create(farm("A")).unwrap();
    let when = NaiveDate::from_ymd_opt(2024, 3, 31)
        .unwrap()
        .and_hms_milli_opt(23, 59, 59, 500)
        .unwrap();
    let mut t = Transaction::new(
        Category::Expense(ExpenseCategory::Maintenance),
        Decimal::new(19999, 2),
        when,
    )
    .unwrap();
    t.farm_id = Some(farm.id);
    t.images = vec![ImageRecord {
        name: "receipt.jpg".into(),
        location: "receipts/receipt.jpg".into(),
    }];
    let saved = store.create(t).unwrap();
    let loaded: Transaction = store.get_by_id(saved.id).unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.date, when);

    assert_eq!(store.transactions_for_farm(farm.id).unwrap().len(), 1);
    assert!(store.transactions_for_farm(farm.id + 1).unwrap().is_empty());
}

#[test]
fn sqlite_crops_by_farm_and_cascade() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);
    let a = store.create(farm("A")).unwrap();
    let b = store.create(farm("B")).unwrap();
    store.create(crop(a.id, "Field 1")).unwrap();
    store.create(crop(b.id, "Field 1")).unwrap();
    store.create(crop(a.id, "Field 2")).unwrap();

    let on_a = store.crops_for_farm(a.id).unwrap();
    let fields: Vec<&str> = on_a.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, vec!["Field 1", "Field 2"]);

    RecordStore::<Farm>::delete(&mut store, a.id).unwrap();
    let left: Vec<Crop> = store.get_all().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].farm_id, b.id);
}

#[test]
fn sqlite_task_and_inventory_round_trip() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);
    let f = store.create(farm("A")).unwrap();
    let task = store
        .create(Task {
            id: 0,
            farm_id: f.id,
            crop_id: None,
            title: "Check pumps".into(),
            task_type: TaskType::Inspection,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            notes: None,
            completed: true,
        })
        .unwrap();
    assert_eq!(RecordStore::<Task>::get_by_id(&store, task.id).unwrap(), task);

    let item = store
        .create(InventoryItem {
            id: 0,
            name: "Diesel".into(),
            category: "fuel".into(),
            current_stock: 120,
            reorder_level: 50,
            unit: "gal".into(),
            cost_per_unit: Decimal::new(389, 2),
            supplier: Some("Co-op".into()),
            description: None,
        })
        .unwrap();
    assert_eq!(
        RecordStore::<InventoryItem>::get_by_id(&store, item.id).unwrap(),
        item
    );
}

#[test]
fn select_where_rejects_unknown_columns() {
    let conn = db::open_in_memory().unwrap();
    let store = SqliteStore::new(&conn);
    let res = store.select_where::<Farm>("1=1 OR name", rusqlite::types::Value::Null);
    assert!(res.is_err());
}

#[test]
fn memory_store_ids_are_not_reused() {
    let mut store: MemoryStore<Farm> = MemoryStore::new();
    assert!(store.is_empty());
    let a = store.create(farm("A")).unwrap();
    store.create(farm("B")).unwrap();
    store.delete(a.id).unwrap();
    let c = store.create(farm("C")).unwrap();
    assert_eq!(c.id, 3);
    assert_eq!(store.len(), 2);
    assert!(matches!(
        store.get_by_id(a.id),
        Err(FarmError::NotFound { id: 1, .. })
    ));
    assert!(store.update(a.id, farm("Z")).is_err());
    let names: Vec<String> = store.get_all().unwrap().into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn image_lists_round_trip_as_json() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);
    let when = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut t = Transaction::new(
        Category::Expense(ExpenseCategory::Supplies),
        Decimal::from(12),
        when,
    )
    .unwrap();
    let plain: Transaction = store.create(t.clone()).unwrap();
    t.images = vec![
        ImageRecord {
            name: "fence \"north\".png".into(),
            location: "C:\\scans\\fence.png".into(),
        },
        ImageRecord {
            name: "récépissé.jpg".into(),
            location: "scans/récépissé.jpg".into(),
        },
    ];
    let with_images = store.create(t).unwrap();

    let loaded: Transaction = store.get_by_id(plain.id).unwrap();
    assert!(loaded.images.is_empty());
    let loaded: Transaction = store.get_by_id(with_images.id).unwrap();
    assert_eq!(loaded.images, with_images.images);

    let raw: String = conn
        .query_row("SELECT images FROM transactions WHERE id=?1", [plain.id], |r| r.get(0))
        .unwrap();
    assert_eq!(raw, "[]");
}
