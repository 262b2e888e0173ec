// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod config;
pub mod crops;
pub mod dashboard;
pub mod exporter;
pub mod farms;
pub mod inventory;
pub mod reports;
pub mod tasks;
pub mod transactions;
pub mod weather;

use crate::finance::PeriodSelector;
use crate::utils::{parse_date, parse_month};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

pub(crate) fn arg<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.trim())
        .with_context(|| format!("Missing --{}", name))
}

pub(crate) fn opt_arg<'a>(m: &'a clap::ArgMatches, name: &str) -> Option<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

pub(crate) fn id_arg(m: &clap::ArgMatches, name: &str) -> Result<i64> {
    let raw = arg(m, name)?;
    raw.parse::<i64>()
        .with_context(|| format!("Invalid id '{}' for --{}", raw, name))
}

pub(crate) fn opt_id_arg(m: &clap::ArgMatches, name: &str) -> Result<Option<i64>> {
    match opt_arg(m, name) {
        Some(raw) => Ok(Some(
            raw.parse::<i64>()
                .with_context(|| format!("Invalid id '{}' for --{}", raw, name))?,
        )),
        None => Ok(None),
    }
}

/// `--month`, or `--from/--to`, or the month containing `today`.
pub fn period_from_args(m: &clap::ArgMatches, today: NaiveDate) -> Result<PeriodSelector> {
    if let Some(month) = opt_arg(m, "month") {
        let (y, mo) = parse_month(month)?;
        return Ok(PeriodSelector::month(y, mo)?);
    }
    if let (Some(from), Some(to)) = (opt_arg(m, "from"), opt_arg(m, "to")) {
        let start = parse_date(from)?;
        let end = parse_date(to)?;
        return Ok(PeriodSelector::range(start, end)?);
    }
    Ok(PeriodSelector::month(today.year(), today.month())?)
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
