// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Field map: splits a farm into display fields and resolves crop drops
//! onto them.

use crate::error::{FarmError, Result};
use crate::models::{Crop, CropStatus, Farm};
use crate::store::RecordStore;
use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

pub const MIN_FIELDS: usize = 4;
pub const MAX_FIELDS: usize = 12;
const AREA_PER_FIELD: i64 = 50;
const COLUMNS: usize = 4;
const COLUMN_WIDTH: u32 = 25;
const ROW_HEIGHT: u32 = 30;
const GROWING_DAYS: i64 = 120;
pub const ASSIGNMENT_NOTE: &str = "Assigned via field map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    /// Exact share of the farm area.
    pub share: Decimal,
    /// Share rounded to a whole number for display.
    pub size: Decimal,
    pub position: Position,
}

pub fn generate_field_layout(farm: &Farm) -> Vec<Field> {
    layout_for_size(farm.size)
}

/// `floor(size / 50)` clamped to `MIN_FIELDS..=MAX_FIELDS`.
pub fn field_count(size: Decimal) -> usize {
    let raw = (size / Decimal::from(AREA_PER_FIELD)).floor();
    // Clamp before converting; huge sizes do not fit in usize.
    if raw >= Decimal::from(MAX_FIELDS) {
        return MAX_FIELDS;
    }
    raw.to_usize().unwrap_or(0).clamp(MIN_FIELDS, MAX_FIELDS)
}

pub fn layout_for_size(size: Decimal) -> Vec<Field> {
    if size <= Decimal::ZERO {
        return Vec::new();
    }
    let count = field_count(size);
    let share = size / Decimal::from(count as u64);
    let shown = share.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (0..count)
        .map(|i| Field {
            id: format!("field-{}", i + 1),
            name: format!("Field {}", i + 1),
            share,
            size: shown,
            position: Position {
                x: (i % COLUMNS) as u32 * COLUMN_WIDTH,
                y: (i / COLUMNS) as u32 * ROW_HEIGHT,
            },
        })
        .collect()
}

/// Each field paired with the crop currently planted on it, if any.
pub fn field_occupancy<'a>(
    fields: &'a [Field],
    farm_id: i64,
    crops: &'a [Crop],
) -> Vec<(&'a Field, Option<&'a Crop>)> {
    fields
        .iter()
        .map(|f| {
            let crop = crops
                .iter()
                .find(|c| c.farm_id == farm_id && c.field == f.name);
            (f, crop)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum CropAssignment {
    Update(Crop),
    Create(Crop),
}

/// Decides what dropping `crop_type` on `field_name` means: retype the crop
/// already there, or plant a new one today.
pub fn plan_assignment(
    farm: &Farm,
    crops: &[Crop],
    field_name: &str,
    crop_type: &str,
    today: NaiveDate,
) -> Result<CropAssignment> {
    let fields = generate_field_layout(farm);
    if !fields.iter().any(|f| f.name == field_name) {
        return Err(FarmError::UnknownField(field_name.to_string()));
    }
    let existing = crops
        .iter()
        .find(|c| c.farm_id == farm.id && c.field == field_name);
    Ok(match existing {
        Some(c) => CropAssignment::Update(Crop {
            crop_type: crop_type.to_string(),
            ..c.clone()
        }),
        None => CropAssignment::Create(Crop {
            id: 0,
            farm_id: farm.id,
            crop_type: crop_type.to_string(),
            field: field_name.to_string(),
            planting_date: today,
            expected_harvest: today + Duration::days(GROWING_DAYS),
            status: CropStatus::Planted,
            notes: Some(ASSIGNMENT_NOTE.to_string()),
        }),
    })
}

pub fn apply_assignment<S: RecordStore<Crop>>(
    store: &mut S,
    assignment: CropAssignment,
) -> Result<Crop> {
    match assignment {
        CropAssignment::Update(c) => {
            tracing::info!(crop = c.id, field = %c.field, crop_type = %c.crop_type, "updating field crop");
            store.update(c.id, c)
        }
        CropAssignment::Create(c) => {
            tracing::info!(field = %c.field, crop_type = %c.crop_type, "assigning crop to field");
            store.create(c)
        }
    }
}
