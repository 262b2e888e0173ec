// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use harvestbook::commands::transactions;
use harvestbook::models::{Category, ExpenseCategory, IncomeCategory, Transaction};
use harvestbook::store::{RecordStore, SqliteStore};
use harvestbook::{cli, db};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn run_tx(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["harvestbook", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => transactions::handle(conn, tx_m),
        _ => panic!("no tx subcommand"),
    }
}

fn list_rows(conn: &Connection, args: &[&str]) -> Vec<Transaction> {
    let mut argv = vec!["harvestbook", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let tx_m = matches.subcommand_matches("tx").unwrap();
    let list_m = tx_m.subcommand_matches("list").unwrap();
    transactions::query_rows(conn, list_m).unwrap()
}

fn seed(conn: &Connection) {
    let rows = [
        ("income", "crop-sales", "1000", "2024-03-05"),
        ("expense", "seeds", "400", "2024-03-10"),
        ("expense", "fuel", "55.25", "2024-03-12 14:30"),
        ("income", "livestock", "300", "2024-04-01"),
    ];
    for (kind, cat, amount, date) in rows {
        run_tx(
            conn,
            &[
                "add", "--type", kind, "--category", cat, "--amount", amount, "--date", date,
            ],
        )
        .unwrap();
    }
}

#[test]
fn add_persists_category_and_amount() {
    let conn = db::open_in_memory().unwrap();
    seed(&conn);
    let all: Vec<Transaction> = SqliteStore::new(&conn).get_all().unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].category, Category::Income(IncomeCategory::CropSales));
    assert_eq!(all[2].category, Category::Expense(ExpenseCategory::Fuel));
    assert_eq!(all[2].amount, Decimal::new(5525, 2));
    assert_eq!(all[2].date.format("%H:%M").to_string(), "14:30");
}

#[test]
fn add_rejects_category_of_other_type() {
    let conn = db::open_in_memory().unwrap();
    let err = run_tx(
        &conn,
        &[
            "add", "--type", "income", "--category", "seeds", "--amount", "10", "--date",
            "2024-03-01",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unknown income category 'seeds'"));
}

#[test]
fn add_rejects_negative_amount() {
    let conn = db::open_in_memory().unwrap();
    let res = run_tx(
        &conn,
        &[
            "add", "--type", "expense", "--category", "fuel", "--amount=-5", "--date",
            "2024-03-01",
        ],
    );
    assert!(res.is_err());
    let all: Vec<Transaction> = SqliteStore::new(&conn).get_all().unwrap();
    assert!(all.is_empty());
}

#[test]
fn add_rejects_missing_farm() {
    let conn = db::open_in_memory().unwrap();
    let err = run_tx(
        &conn,
        &[
            "add", "--type", "expense", "--category", "fuel", "--amount", "5", "--date",
            "2024-03-01", "--farm", "42",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Farm 42 not found"));
}

#[test]
fn list_filters_month_newest_first() {
    let conn = db::open_in_memory().unwrap();
    seed(&conn);
    let rows = list_rows(&conn, &["--month", "2024-03"]);
    let ids: Vec<i64> = rows.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn list_respects_type_and_limit() {
    let conn = db::open_in_memory().unwrap();
    seed(&conn);
    let rows = list_rows(&conn, &["--month", "2024-03", "--type", "expense"]);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|t| t.amount > Decimal::ZERO));

    let rows = list_rows(&conn, &["--from", "2024-03-01", "--to", "2024-04-30", "--limit", "2"]);
    let ids: Vec<i64> = rows.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![4, 3]);
}

#[test]
fn rm_missing_transaction_errors() {
    let conn = db::open_in_memory().unwrap();
    let err = run_tx(&conn, &["rm", "--id", "9"]).unwrap_err();
    assert!(err.to_string().contains("Transaction 9 not found"));
}

#[test]
fn add_rejects_amount_above_limit() {
    let conn = db::open_in_memory().unwrap();
    let err = run_tx(
        &conn,
        &[
            "add", "--type", "income", "--category", "crop-sales", "--amount",
            "1000000000000000.01", "--date", "2024-03-01",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid amount"));
    let all: Vec<Transaction> = SqliteStore::new(&conn).get_all().unwrap();
    assert!(all.is_empty());
}
