// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, id_arg, opt_arg};
use crate::inventory::{InventoryQuery, low_stock, query_items};
use crate::models::InventoryItem;
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{currency_symbol, fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("low", _)) => low(conn)?,
        Some(("rm", sub)) => {
            let id = id_arg(sub, "id")?;
            RecordStore::<InventoryItem>::delete(&mut SqliteStore::new(conn), id)?;
            println!("Removed inventory item {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let item = InventoryItem {
        id: 0,
        name: arg(sub, "name")?.to_string(),
        category: arg(sub, "category")?.to_string(),
        current_stock: *sub.get_one::<i64>("stock").context("Missing --stock")?,
        reorder_level: *sub.get_one::<i64>("reorder").context("Missing --reorder")?,
        unit: arg(sub, "unit")?.to_string(),
        cost_per_unit: parse_decimal(arg(sub, "cost")?)?,
        supplier: opt_arg(sub, "supplier").map(str::to_string),
        description: opt_arg(sub, "description").map(str::to_string),
    };
    let item = SqliteStore::new(conn).create(item)?;
    println!(
        "Added {} ({} {}) as #{}",
        item.name, item.current_stock, item.unit, item.id
    );
    Ok(())
}

fn item_rows(items: Vec<InventoryItem>, sym: &str) -> Vec<Vec<String>> {
    items
        .into_iter()
        .map(|i| {
            let flag = if i.is_low_stock() { "LOW" } else { "" };
            vec![
                i.id.to_string(),
                i.name,
                i.category,
                format!("{} {}", i.current_stock, i.unit),
                i.reorder_level.to_string(),
                fmt_money(&i.cost_per_unit, sym),
                flag.to_string(),
            ]
        })
        .collect()
}

const HEADERS: [&str; 7] = ["ID", "Name", "Category", "Stock", "Reorder", "Cost/unit", ""];

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let all: Vec<InventoryItem> = SqliteStore::new(conn).get_all()?;
    let q = InventoryQuery {
        search: opt_arg(sub, "search").map(str::to_string),
        category: opt_arg(sub, "category").map(str::to_string),
        sort: arg(sub, "sort")?.parse()?,
    };
    let items = query_items(&all, &q);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        println!("{} of {} items", items.len(), all.len());
        let sym = currency_symbol(conn)?;
        println!("{}", pretty_table(&HEADERS, item_rows(items, &sym)));
    }
    Ok(())
}

fn low(conn: &Connection) -> Result<()> {
    let all: Vec<InventoryItem> = SqliteStore::new(conn).get_all()?;
    let items: Vec<InventoryItem> = low_stock(&all).into_iter().cloned().collect();
    if items.is_empty() {
        println!("No items at or below their reorder level");
        return Ok(());
    }
    let sym = currency_symbol(conn)?;
    println!("{}", pretty_table(&HEADERS, item_rows(items, &sym)));
    Ok(())
}
