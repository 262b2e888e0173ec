// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{period_from_args, today};
use crate::finance::{aggregate, filter_transactions};
use crate::models::Transaction;
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{currency_symbol, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("export", sub)) => crate::commands::exporter::handle(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from_args(sub, today())?;
    let all: Vec<Transaction> = SqliteStore::new(conn).get_all()?;
    let in_period = filter_transactions(&all, &period, None)?;
    let s = aggregate(&in_period);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let sym = currency_symbol(conn)?;
    println!("Period: {} ({} transactions)", period.label(), in_period.len());
    let data = vec![
        vec!["Total Income".to_string(), fmt_money(&s.income, &sym)],
        vec!["Total Expenses".to_string(), fmt_money(&s.expenses, &sym)],
        vec![
            "Net Profit".to_string(),
            format!("{} ({})", fmt_money(&s.profit, &sym), s.trend_label()),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount"], data));
    Ok(())
}
