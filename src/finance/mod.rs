// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Financial reporting: period filtering, income/expense aggregation and
//! report export.

pub mod aggregate;
pub mod period;
pub mod report;

pub use aggregate::{Summary, Trend, aggregate};
pub use period::{PeriodSelector, filter_transactions};
pub use report::{ExportFormat, ReportRow, to_rows};
