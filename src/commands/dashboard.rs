// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::today;
use crate::dashboard::overview;
use crate::models::{Crop, Farm, Task, Transaction};
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{currency_symbol, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let farms: Vec<Farm> = store.get_all()?;
    let crops: Vec<Crop> = store.get_all()?;
    let tasks: Vec<Task> = store.get_all()?;
    let txns: Vec<Transaction> = store.get_all()?;
    let o = overview(&farms, &crops, &tasks, &txns, today())?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &o)? {
        return Ok(());
    }
    let sym = currency_symbol(conn)?;
    let rows = vec![
        vec!["Total Farms".to_string(), o.total_farms.to_string()],
        vec!["Active Crops".to_string(), o.active_crops.to_string()],
        vec!["Pending Tasks".to_string(), o.pending_tasks.to_string()],
        vec![
            "Monthly Profit".to_string(),
            format!("{} ({})", fmt_money(&o.month.profit, &sym), o.month.trend_label()),
        ],
    ];
    println!("{}", pretty_table(&["", ""], rows));
    Ok(())
}
