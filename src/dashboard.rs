// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::finance::{PeriodSelector, Summary, aggregate, filter_transactions};
use crate::models::{Crop, CropStatus, Farm, Task, Transaction};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_farms: usize,
    pub active_crops: usize,
    pub pending_tasks: usize,
    pub month: Summary,
}

pub fn overview(
    farms: &[Farm],
    crops: &[Crop],
    tasks: &[Task],
    txns: &[Transaction],
    today: NaiveDate,
) -> Result<Overview> {
    let period = PeriodSelector::month(today.year(), today.month())?;
    let in_month = filter_transactions(txns, &period, None)?;
    Ok(Overview {
        total_farms: farms.len(),
        active_crops: crops
            .iter()
            .filter(|c| c.status != CropStatus::Harvested)
            .count(),
        pending_tasks: tasks.iter().filter(|t| !t.completed).count(),
        month: aggregate(&in_month),
    })
}
