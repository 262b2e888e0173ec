// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record stores: the get/create/update/delete contract every entity is
//! managed through, backed by SQLite or by an in-memory map.

use crate::error::{FarmError, Result};
use crate::models::{
    Category, Crop, CropStatus, Farm, ImageRecord, InventoryItem, SizeUnit, Task, TaskType,
    Transaction, TxnType,
};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{Type, Value};
use rusqlite::{Connection, Row, params_from_iter};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

pub trait Record: Clone {
    const ENTITY: &'static str;
    const TABLE: &'static str;
    /// Every column except `id`, in `to_values` order.
    const COLUMNS: &'static [&'static str];

    fn with_id(self, id: i64) -> Self;
    /// Column 0 is `id`, followed by `COLUMNS`.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
    fn to_values(&self) -> Result<Vec<Value>>;
}

pub trait RecordStore<T: Record> {
    fn get_all(&self) -> Result<Vec<T>>;
    fn get_by_id(&self, id: i64) -> Result<T>;
    fn create(&mut self, record: T) -> Result<T>;
    fn update(&mut self, id: i64, record: T) -> Result<T>;
    fn delete(&mut self, id: i64) -> Result<()>;
}

pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SqliteStore { conn }
    }

    /// Records whose `column` equals `value`, ordered by id.
    pub fn select_where<T: Record>(&self, column: &str, value: Value) -> Result<Vec<T>> {
        if !T::COLUMNS.contains(&column) {
            return Err(FarmError::InvalidValue {
                what: "column",
                value: column.to_string(),
            });
        }
        let sql = format!(
            "SELECT id, {} FROM {} WHERE {}=?1 ORDER BY id",
            T::COLUMNS.join(", "),
            T::TABLE,
            column
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([value], T::from_row)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn transactions_for_farm(&self, farm_id: i64) -> Result<Vec<Transaction>> {
        self.select_where("farm_id", Value::Integer(farm_id))
    }

    pub fn crops_for_farm(&self, farm_id: i64) -> Result<Vec<Crop>> {
        self.select_where("farm_id", Value::Integer(farm_id))
    }
}

impl<T: Record> RecordStore<T> for SqliteStore<'_> {
    fn get_all(&self) -> Result<Vec<T>> {
        let sql = format!(
            "SELECT id, {} FROM {} ORDER BY id",
            T::COLUMNS.join(", "),
            T::TABLE
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], T::from_row)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        tracing::debug!(table = T::TABLE, count = out.len(), "loaded records");
        Ok(out)
    }

    fn get_by_id(&self, id: i64) -> Result<T> {
        let sql = format!(
            "SELECT id, {} FROM {} WHERE id=?1",
            T::COLUMNS.join(", "),
            T::TABLE
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(r) => Ok(T::from_row(r)?),
            None => Err(FarmError::NotFound {
                entity: T::ENTITY,
                id,
            }),
        }
    }

    fn create(&mut self, record: T) -> Result<T> {
        let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {}({}) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders.join(", ")
        );
        self.conn
            .execute(&sql, params_from_iter(record.to_values()?))?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(table = T::TABLE, id, "created record");
        Ok(record.with_id(id))
    }

    fn update(&mut self, id: i64, record: T) -> Result<T> {
        let sets: Vec<String> = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}=?{}", c, i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id=?{}",
            T::TABLE,
            sets.join(", "),
            T::COLUMNS.len() + 1
        );
        let mut values = record.to_values()?;
        values.push(Value::Integer(id));
        let changed = self.conn.execute(&sql, params_from_iter(values))?;
        if changed == 0 {
            return Err(FarmError::NotFound {
                entity: T::ENTITY,
                id,
            });
        }
        tracing::debug!(table = T::TABLE, id, "updated record");
        Ok(record.with_id(id))
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id=?1", T::TABLE);
        let changed = self.conn.execute(&sql, [id])?;
        if changed == 0 {
            return Err(FarmError::NotFound {
                entity: T::ENTITY,
                id,
            });
        }
        tracing::debug!(table = T::TABLE, id, "deleted record");
        Ok(())
    }
}

/// Id-keyed records held in memory. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        MemoryStore {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> RecordStore<T> for MemoryStore<T> {
    fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.records.values().cloned().collect())
    }

    fn get_by_id(&self, id: i64) -> Result<T> {
        self.records.get(&id).cloned().ok_or(FarmError::NotFound {
            entity: T::ENTITY,
            id,
        })
    }

    fn create(&mut self, record: T) -> Result<T> {
        let id = self.next_id;
        self.next_id += 1;
        let record = record.with_id(id);
        self.records.insert(id, record.clone());
        Ok(record)
    }

    fn update(&mut self, id: i64, record: T) -> Result<T> {
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record.with_id(id);
                Ok(slot.clone())
            }
            None => Err(FarmError::NotFound {
                entity: T::ENTITY,
                id,
            }),
        }
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(FarmError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }
}

// Column helpers

fn conversion_err(idx: usize, err: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn parsed_col<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let s: String = row.get(idx)?;
    s.parse::<T>().map_err(|e| conversion_err(idx, e))
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn opt_text(s: &Option<String>) -> Value {
    match s {
        Some(v) => Value::Text(v.clone()),
        None => Value::Null,
    }
}

fn opt_int(v: Option<i64>) -> Value {
    match v {
        Some(i) => Value::Integer(i),
        None => Value::Null,
    }
}

fn date_value(d: NaiveDate) -> Value {
    Value::Text(d.format("%Y-%m-%d").to_string())
}

impl Record for Transaction {
    const ENTITY: &'static str = "Transaction";
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static [&'static str] = &[
        "farm_id",
        "type",
        "category",
        "amount",
        "date",
        "description",
        "images",
    ];

    fn with_id(self, id: i64) -> Self {
        Transaction { id, ..self }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let kind: TxnType = parsed_col(row, 2)?;
        let slug: String = row.get(3)?;
        let category = Category::parse(kind, &slug).map_err(|e| conversion_err(3, e))?;
        let images_json: Option<String> = row.get(7)?;
        let images: Vec<ImageRecord> = match images_json {
            Some(s) if !s.is_empty() => {
                serde_json::from_str(&s).map_err(|e| conversion_err(7, e))?
            }
            _ => Vec::new(),
        };
        Ok(Transaction {
            id: row.get(0)?,
            farm_id: row.get(1)?,
            category,
            amount: parsed_col::<Decimal>(row, 4)?,
            date: row.get::<_, NaiveDateTime>(5)?,
            description: row.get(6)?,
            images,
        })
    }

    fn to_values(&self) -> Result<Vec<Value>> {
        let images = serde_json::to_string(&self.images)?;
        Ok(vec![
            opt_int(self.farm_id),
            text(self.kind().slug()),
            text(self.category.slug()),
            Value::Text(self.amount.to_string()),
            Value::Text(self.date.format("%Y-%m-%d %H:%M:%S%.f").to_string()),
            opt_text(&self.description),
            Value::Text(images),
        ])
    }
}

impl Record for Farm {
    const ENTITY: &'static str = "Farm";
    const TABLE: &'static str = "farms";
    const COLUMNS: &'static [&'static str] = &["name", "location", "size", "size_unit"];

    fn with_id(self, id: i64) -> Self {
        Farm { id, ..self }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Farm {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
            size: parsed_col::<Decimal>(row, 3)?,
            size_unit: parsed_col::<SizeUnit>(row, 4)?,
        })
    }

    fn to_values(&self) -> Result<Vec<Value>> {
        Ok(vec![
            text(&self.name),
            text(&self.location),
            Value::Text(self.size.to_string()),
            text(self.size_unit.slug()),
        ])
    }
}

impl Record for Crop {
    const ENTITY: &'static str = "Crop";
    const TABLE: &'static str = "crops";
    const COLUMNS: &'static [&'static str] = &[
        "farm_id",
        "crop_type",
        "field",
        "planting_date",
        "expected_harvest",
        "status",
        "notes",
    ];

    fn with_id(self, id: i64) -> Self {
        Crop { id, ..self }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Crop {
            id: row.get(0)?,
            farm_id: row.get(1)?,
            crop_type: row.get(2)?,
            field: row.get(3)?,
            planting_date: row.get::<_, NaiveDate>(4)?,
            expected_harvest: row.get::<_, NaiveDate>(5)?,
            status: parsed_col::<CropStatus>(row, 6)?,
            notes: row.get(7)?,
        })
    }

    fn to_values(&self) -> Result<Vec<Value>> {
        Ok(vec![
            Value::Integer(self.farm_id),
            text(&self.crop_type),
            text(&self.field),
            date_value(self.planting_date),
            date_value(self.expected_harvest),
            text(self.status.slug()),
            opt_text(&self.notes),
        ])
    }
}

impl Record for Task {
    const ENTITY: &'static str = "Task";
    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static [&'static str] = &[
        "farm_id",
        "crop_id",
        "title",
        "task_type",
        "due_date",
        "notes",
        "completed",
    ];

    fn with_id(self, id: i64) -> Self {
        Task { id, ..self }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Task {
            id: row.get(0)?,
            farm_id: row.get(1)?,
            crop_id: row.get(2)?,
            title: row.get(3)?,
            task_type: parsed_col::<TaskType>(row, 4)?,
            due_date: row.get::<_, NaiveDate>(5)?,
            notes: row.get(6)?,
            completed: row.get(7)?,
        })
    }

    fn to_values(&self) -> Result<Vec<Value>> {
        Ok(vec![
            Value::Integer(self.farm_id),
            opt_int(self.crop_id),
            text(&self.title),
            text(self.task_type.slug()),
            date_value(self.due_date),
            opt_text(&self.notes),
            Value::Integer(i64::from(self.completed)),
        ])
    }
}

impl Record for InventoryItem {
    const ENTITY: &'static str = "Inventory item";
    const TABLE: &'static str = "inventory";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "category",
        "current_stock",
        "reorder_level",
        "unit",
        "cost_per_unit",
        "supplier",
        "description",
    ];

    fn with_id(self, id: i64) -> Self {
        InventoryItem { id, ..self }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(InventoryItem {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            current_stock: row.get(3)?,
            reorder_level: row.get(4)?,
            unit: row.get(5)?,
            cost_per_unit: parsed_col::<Decimal>(row, 6)?,
            supplier: row.get(7)?,
            description: row.get(8)?,
        })
    }

    fn to_values(&self) -> Result<Vec<Value>> {
        Ok(vec![
            text(&self.name),
            text(&self.category),
            Value::Integer(self.current_stock),
            Value::Integer(self.reorder_level),
            text(&self.unit),
            Value::Text(self.cost_per_unit.to_string()),
            opt_text(&self.supplier),
            opt_text(&self.description),
        ])
    }
}
