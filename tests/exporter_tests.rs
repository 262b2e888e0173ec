// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use harvestbook::finance::report::{ReportOptions, default_file_name, render_csv, render_document};
use harvestbook::finance::{ExportFormat, PeriodSelector, aggregate, to_rows};
use harvestbook::models::{Category, ExpenseCategory, Farm, IncomeCategory, SizeUnit, Transaction};
use harvestbook::store::{RecordStore, SqliteStore};
use harvestbook::{cli, commands::reports, db};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn txn(id: i64, category: Category, amount: &str, date: &str, farm_id: Option<i64>) -> Transaction {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut t = Transaction::new(category, Decimal::from_str_exact(amount).unwrap(), d).unwrap();
    t.id = id;
    t.farm_id = farm_id;
    t
}

fn farms() -> Vec<Farm> {
    vec![Farm {
        id: 1,
        name: "North Field".into(),
        location: "Iowa".into(),
        size: Decimal::from(120),
        size_unit: SizeUnit::Acres,
    }]
}

#[test]
fn rows_humanize_and_resolve_farms() {
    let mut t = txn(
        1,
        Category::Income(IncomeCategory::EquipmentRental),
        "1234.5",
        "2024-03-05",
        Some(1),
    );
    t.description = Some("Tractor hire".into());
    let rows = to_rows(&[t.clone()], &farms(), ExportFormat::Csv, "$");
    assert_eq!(
        rows[0].fields(),
        ["2024-03-05", "Income", "Equipment Rental", "1234.50", "North Field - Iowa", "Tractor hire"]
    );

    let rows = to_rows(&[t], &farms(), ExportFormat::Document, "$");
    assert_eq!(
        rows[0].fields(),
        ["05/03/2024", "Income", "Equipment Rental", "$1,234.50", "North Field", "Tractor hire"]
    );
}

#[test]
fn unresolved_or_missing_farm_reads_all_farms() {
    let txns = vec![
        txn(1, Category::Expense(ExpenseCategory::Fuel), "10", "2024-03-05", Some(99)),
        txn(2, Category::Expense(ExpenseCategory::OtherExpense), "5", "2024-03-06", None),
    ];
    let rows = to_rows(&txns, &farms(), ExportFormat::Csv, "$");
    assert_eq!(rows[0].farm, "All Farms");
    assert_eq!(rows[1].farm, "All Farms");
    assert_eq!(rows[1].category, "Other Expense");
    assert_eq!(rows[1].description, "");
}

#[test]
fn csv_has_plain_header_and_quoted_fields() {
    let mut t = txn(1, Category::Expense(ExpenseCategory::Seeds), "400", "2024-03-10", Some(1));
    t.description = Some("say \"hi\"".into());
    let rows = to_rows(&[t], &farms(), ExportFormat::Csv, "$");
    let out = render_csv(&rows).unwrap();
    assert_eq!(
        out,
        "Date,Type,Category,Amount,Farm,Description\n\
         \"2024-03-10\",\"Expense\",\"Seeds\",\"400.00\",\"North Field - Iowa\",\"say \"\"hi\"\"\"\n"
    );
}

#[test]
fn csv_with_no_rows_is_just_the_header() {
    assert_eq!(
        render_csv(&[]).unwrap(),
        "Date,Type,Category,Amount,Farm,Description\n"
    );
}

#[test]
fn document_lists_period_totals_and_pages() {
    let txns: Vec<Transaction> = (1..=5)
        .map(|i| {
            txn(
                i,
                Category::Income(IncomeCategory::CropSales),
                "1500",
                &format!("2024-03-0{}", i),
                None,
            )
        })
        .collect();
    let summary = aggregate(&txns);
    let sel = PeriodSelector::month(2024, 3).unwrap();
    let rows = to_rows(&txns, &[], ExportFormat::Document, "$");
    let options = ReportOptions {
        currency_symbol: "$".into(),
        page_rows: 2,
    };
    let doc = render_document(&rows, &summary, &sel, &options);
    assert!(doc.starts_with("Financial Report\nPeriod: March 2024\n"));
    assert!(doc.contains("Total Income: $7,500.00"));
    assert!(doc.contains("Total Expenses: $0.00"));
    assert!(doc.contains("Net Profit: $7,500.00"));
    assert!(doc.contains("Page 1 of 3"));
    assert!(doc.contains("Page 3 of 3"));
    assert_eq!(doc.matches('\u{000C}').count(), 2);
    assert!(doc.contains("$1,500.00"));
}

#[test]
fn empty_document_still_has_a_table_page() {
    let sel = PeriodSelector::month(2024, 3).unwrap();
    let doc = render_document(&[], &aggregate(&[]), &sel, &ReportOptions::default());
    assert!(doc.contains("Page 1 of 1"));
    assert!(doc.contains("Description"));
}

#[test]
fn default_names_carry_the_date() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(
        default_file_name(ExportFormat::Csv, d),
        "financial-report-2024-03-05.csv"
    );
    assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Document);
}

#[test]
fn report_export_writes_filtered_csv() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);
    let farm = store.create(farms().remove(0)).unwrap();
    store
        .create(txn(0, Category::Income(IncomeCategory::CropSales), "1000", "2024-03-05", Some(farm.id)))
        .unwrap();
    store
        .create(txn(0, Category::Expense(ExpenseCategory::Seeds), "400", "2024-03-10", None))
        .unwrap();
    store
        .create(txn(0, Category::Expense(ExpenseCategory::Fuel), "70", "2024-04-02", None))
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("march.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "harvestbook",
        "report",
        "export",
        "--format",
        "csv",
        "--month",
        "2024-03",
        "--out",
        &out_str,
    ]);
    if let Some(("report", report_m)) = matches.subcommand() {
        reports::handle(&conn, report_m).unwrap();
    } else {
        panic!("no report subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Type,Category,Amount,Farm,Description");
    assert!(lines[1].starts_with("\"2024-03-10\",\"Expense\",\"Seeds\""));
    assert!(lines[2].contains("\"North Field - Iowa\""));
}

#[test]
fn report_export_rejects_unknown_format() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "harvestbook",
        "report",
        "export",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    if let Some(("report", report_m)) = matches.subcommand() {
        assert!(reports::handle(&conn, report_m).is_err());
    } else {
        panic!("no report subcommand");
    }
    assert!(!out_path.exists());
}

#[test]
fn report_export_rejects_reversed_range() {
    let conn = db::open_in_memory().unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bad.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "harvestbook",
        "report",
        "export",
        "--from",
        "2024-01-10",
        "--to",
        "2024-01-05",
        "--out",
        &out_str,
    ]);
    if let Some(("report", report_m)) = matches.subcommand() {
        let err = reports::handle(&conn, report_m).unwrap_err();
        assert!(err.to_string().contains("Invalid range"));
    } else {
        panic!("no report subcommand");
    }
    assert!(!out_path.exists());
}
