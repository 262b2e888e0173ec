// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, id_arg, opt_arg, opt_id_arg, period_from_args, today};
use crate::finance::filter_transactions;
use crate::models::{Category, Farm, Transaction, TxnType};
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{
    currency_symbol, fmt_money, maybe_print_json, parse_datetime, parse_decimal, pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = id_arg(sub, "id")?;
            RecordStore::<Transaction>::delete(&mut SqliteStore::new(conn), id)?;
            println!("Removed transaction {}", id);
        }
        Some(("categories", sub)) => {
            let kind: TxnType = arg(sub, "type")?.parse()?;
            let rows = Category::slugs_for(kind)
                .into_iter()
                .map(|s| vec![s.to_string(), crate::utils::humanize_slug(s)])
                .collect();
            println!("{}", pretty_table(&["Slug", "Category"], rows));
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TxnType = arg(sub, "type")?.parse()?;
    let category = Category::parse(kind, arg(sub, "category")?)?;
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let date = parse_datetime(arg(sub, "date")?)?;
    let mut txn = Transaction::new(category, amount, date)?;
    txn.farm_id = opt_id_arg(sub, "farm")?;
    txn.description = opt_arg(sub, "description").map(str::to_string);

    let mut store = SqliteStore::new(conn);
    if let Some(farm_id) = txn.farm_id {
        // Surface a missing farm now instead of as a foreign key failure.
        RecordStore::<Farm>::get_by_id(&store, farm_id)?;
    }
    let txn = store.create(txn)?;
    tracing::info!(txn = txn.id, kind = kind.slug(), "transaction recorded");
    println!(
        "Recorded {} {} ({}) on {} as #{}",
        kind.slug(),
        txn.amount,
        txn.category.label(),
        txn.date.date(),
        txn.id
    );
    Ok(())
}

/// Transactions in the selected period, newest first.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let period = period_from_args(sub, today())?;
    let kind = match opt_arg(sub, "type") {
        Some(t) => Some(t.parse::<TxnType>()?),
        None => None,
    };
    let all: Vec<Transaction> = SqliteStore::new(conn).get_all()?;
    let mut rows = filter_transactions(&all, &period, kind)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let sym = currency_symbol(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.date().to_string(),
                    t.kind().label().to_string(),
                    t.category.label(),
                    fmt_money(&t.amount, &sym),
                    t.farm_id.map(|f| f.to_string()).unwrap_or_default(),
                    t.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Category", "Amount", "Farm", "Description"],
                rows,
            )
        );
    }
    Ok(())
}
