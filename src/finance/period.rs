// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FarmError, Result};
use crate::models::{Transaction, TxnType};
use crate::utils::month_end;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The window a report covers: an inclusive custom range of calendar days,
/// or one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodSelector {
    Range { start: NaiveDate, end: NaiveDate },
    Month { year: i32, month: u32 },
}

impl PeriodSelector {
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let sel = PeriodSelector::Range { start, end };
        sel.validate()?;
        Ok(sel)
    }

    pub fn month(year: i32, month: u32) -> Result<Self> {
        let sel = PeriodSelector::Month { year, month };
        sel.validate()?;
        Ok(sel)
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            PeriodSelector::Range { start, end } if start > end => {
                Err(FarmError::InvalidRange { start, end })
            }
            PeriodSelector::Range { .. } => Ok(()),
            PeriodSelector::Month { year, month } => {
                if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
                    return Err(FarmError::InvalidMonth { year, month });
                }
                Ok(())
            }
        }
    }

    /// First and last calendar day covered.
    pub fn days(&self) -> Result<(NaiveDate, NaiveDate)> {
        self.validate()?;
        match *self {
            PeriodSelector::Range { start, end } => Ok((start, end)),
            PeriodSelector::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1)
                    .ok_or(FarmError::InvalidMonth { year, month })?;
                let last = month_end(year, month).ok_or(FarmError::InvalidMonth { year, month })?;
                Ok((first, last))
            }
        }
    }

    /// Inclusive instant bounds: midnight of the first day through
    /// 23:59:59.999 of the last day.
    pub fn bounds(&self) -> Result<(NaiveDateTime, NaiveDateTime)> {
        let (first, last) = self.days()?;
        let end_of_day =
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        Ok((first.and_time(NaiveTime::MIN), last.and_time(end_of_day)))
    }

    pub fn label(&self) -> String {
        match *self {
            PeriodSelector::Range { start, end } => format!(
                "{} - {}",
                start.format("%d/%m/%Y"),
                end.format("%d/%m/%Y")
            ),
            PeriodSelector::Month { year, month } => match NaiveDate::from_ymd_opt(year, month, 1)
            {
                Some(d) => d.format("%B %Y").to_string(),
                None => format!("{}-{:02}", year, month),
            },
        }
    }
}

/// Transactions inside `selector`, optionally restricted to one type,
/// newest first. Equal dates keep their input order.
pub fn filter_transactions(
    txns: &[Transaction],
    selector: &PeriodSelector,
    kind: Option<TxnType>,
) -> Result<Vec<Transaction>> {
    let (from, to) = selector.bounds()?;
    let mut out: Vec<Transaction> = txns
        .iter()
        .filter(|t| kind.is_none_or(|k| t.kind() == k))
        .filter(|t| t.date >= from && t.date <= to)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    tracing::debug!(
        period = %selector.label(),
        matched = out.len(),
        total = txns.len(),
        "filtered transactions"
    );
    Ok(out)
}
