// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T, E = FarmError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum FarmError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Unknown {kind} category '{slug}'")]
    InvalidCategory { kind: String, slug: String },

    #[error("Invalid {what} '{value}'")]
    InvalidValue { what: &'static str, value: String },

    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(rust_decimal::Decimal),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Field '{0}' is not part of this farm's layout")]
    UnknownField(String),

    #[error("Unknown format: {0} (use csv|pdf)")]
    UnknownFormat(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
