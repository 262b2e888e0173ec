// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, opt_arg, period_from_args, today};
use crate::finance::report::{ReportOptions, default_file_name, export_report};
use crate::finance::{ExportFormat, aggregate, filter_transactions, to_rows};
use crate::models::{Farm, Transaction, TxnType};
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{currency_symbol, report_page_rows};
use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;

/// `report export`: filtered transactions for the period written as CSV or
/// as the paginated document.
pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let format: ExportFormat = arg(sub, "format")?.parse()?;
    let period = period_from_args(sub, today())?;
    let kind = match opt_arg(sub, "type") {
        Some(t) => Some(t.parse::<TxnType>()?),
        None => None,
    };
    let out = match opt_arg(sub, "out") {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(default_file_name(format, today())),
    };

    let store = SqliteStore::new(conn);
    let txns: Vec<Transaction> = store.get_all()?;
    let farms: Vec<Farm> = store.get_all()?;
    let filtered = filter_transactions(&txns, &period, kind)?;
    let summary = aggregate(&filtered);
    let options = ReportOptions {
        currency_symbol: currency_symbol(conn)?,
        page_rows: report_page_rows(conn)?,
    };
    let rows = to_rows(&filtered, &farms, format, &options.currency_symbol);
    export_report(&out, format, &rows, &summary, &period, &options)?;
    println!("Exported {} transactions to {}", rows.len(), out.display());
    Ok(())
}
