// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use harvestbook::finance::{PeriodSelector, Trend, aggregate, filter_transactions};
use harvestbook::error::FarmError;
use harvestbook::models::{Category, ExpenseCategory, IncomeCategory, MAX_AMOUNT, Transaction};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn txn(category: Category, amount: &str, date: &str) -> Transaction {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    Transaction::new(category, dec(amount), d).unwrap()
}

#[test]
fn march_scenario() {
    let txns = vec![
        txn(Category::Income(IncomeCategory::CropSales), "1000", "2024-03-05"),
        txn(Category::Expense(ExpenseCategory::Seeds), "400", "2024-03-10"),
    ];
    let sel = PeriodSelector::month(2024, 3).unwrap();
    let s = aggregate(&filter_transactions(&txns, &sel, None).unwrap());
    assert_eq!(s.income, dec("1000"));
    assert_eq!(s.expenses, dec("400"));
    assert_eq!(s.profit, dec("600"));
    assert_eq!(s.trend, Trend::Up);
    assert_eq!(s.trend_percent, dec("150"));
    assert_eq!(s.trend_label(), "+150.0%");
}

#[test]
fn profit_is_exact_difference() {
    let txns = vec![
        txn(Category::Income(IncomeCategory::Subsidies), "0.10", "2024-05-01"),
        txn(Category::Income(IncomeCategory::Livestock), "0.20", "2024-05-02"),
        txn(Category::Expense(ExpenseCategory::Fuel), "0.30", "2024-05-03"),
        txn(Category::Expense(ExpenseCategory::Labor), "12.345", "2024-05-04"),
    ];
    let s = aggregate(&txns);
    assert_eq!(s.profit, s.income - s.expenses);
    assert_eq!(s.profit, dec("-12.345"));
    assert_eq!(s.trend, Trend::Down);
}

#[test]
fn zero_expenses_divide_by_one() {
    let txns = vec![txn(
        Category::Income(IncomeCategory::CropSales),
        "250",
        "2024-05-01",
    )];
    let s = aggregate(&txns);
    assert!(s.expenses.is_zero());
    assert_eq!(s.trend_percent, s.profit * Decimal::ONE_HUNDRED);
    assert_eq!(s.trend_percent, dec("25000"));
}

#[test]
fn empty_set_is_flat_and_up() {
    let s = aggregate(&[]);
    assert!(s.income.is_zero() && s.expenses.is_zero() && s.profit.is_zero());
    assert_eq!(s.trend, Trend::Up);
    assert!(s.trend_percent.is_zero());
    assert_eq!(s.trend_label(), "+0.0%");
}

#[test]
fn losses_label_without_plus() {
    let txns = vec![
        txn(Category::Income(IncomeCategory::CropSales), "100", "2024-05-01"),
        txn(Category::Expense(ExpenseCategory::Equipment), "800", "2024-05-02"),
    ];
    let s = aggregate(&txns);
    assert_eq!(s.trend, Trend::Down);
    assert_eq!(s.trend_label(), "-87.5%");
}

fn stored(category: Category, amount: Decimal) -> Transaction {
    // Rows read back from the database skip `Transaction::new`.
    let mut t = txn(category, "0", "2024-03-05");
    t.amount = amount;
    t
}

#[test]
fn amounts_above_the_limit_are_rejected() {
    let at = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let cat = Category::Income(IncomeCategory::CropSales);
    assert!(Transaction::new(cat, Decimal::from(MAX_AMOUNT), at).is_ok());
    let err = Transaction::new(cat, Decimal::from(MAX_AMOUNT) + Decimal::ONE, at).unwrap_err();
    assert!(matches!(err, FarmError::InvalidValue { what: "amount", .. }));
    let huge = Decimal::from_i128_with_scale(10i128.pow(27), 0);
    assert!(Transaction::new(cat, huge, at).is_err());
}

#[test]
fn largest_accepted_amounts_aggregate_exactly() {
    let txns = vec![
        txn(Category::Income(IncomeCategory::CropSales), "1000000000000000", "2024-03-05"),
        txn(Category::Income(IncomeCategory::Livestock), "1000000000000000", "2024-03-06"),
        txn(Category::Expense(ExpenseCategory::Equipment), "0.01", "2024-03-07"),
    ];
    let s = aggregate(&txns);
    assert_eq!(s.income, dec("2000000000000000"));
    assert_eq!(s.profit, dec("1999999999999999.99"));
    assert_eq!(s.trend_percent, dec("19999999999999999900"));
}

#[test]
fn huge_profit_percent_saturates() {
    let huge = Decimal::from_i128_with_scale(10i128.pow(27), 0);
    let s = aggregate(&[stored(Category::Income(IncomeCategory::CropSales), huge)]);
    assert_eq!(s.profit, huge);
    assert_eq!(s.trend, Trend::Up);
    assert_eq!(s.trend_percent, Decimal::MAX);
    assert!(s.trend_label().starts_with('+'));
}

#[test]
fn loss_percent_bottoms_out_at_minus_hundred() {
    let tiny = Decimal::from_i128_with_scale(1, 20);
    let s = aggregate(&[stored(Category::Expense(ExpenseCategory::Fuel), tiny)]);
    assert_eq!(s.trend, Trend::Down);
    assert_eq!(s.trend_percent, dec("-100"));

    let txns = vec![
        stored(Category::Expense(ExpenseCategory::Labor), Decimal::MAX),
        stored(Category::Income(IncomeCategory::Subsidies), Decimal::ZERO),
    ];
    let s = aggregate(&txns);
    assert_eq!(s.trend, Trend::Down);
    assert_eq!(s.trend_percent, dec("-100"));
}

#[test]
fn overflowing_totals_saturate() {
    let half = Decimal::MAX / Decimal::TWO;
    let txns = vec![
        stored(Category::Income(IncomeCategory::CropSales), half),
        stored(Category::Income(IncomeCategory::CropSales), half),
        stored(Category::Income(IncomeCategory::CropSales), half),
        stored(Category::Expense(ExpenseCategory::Seeds), Decimal::from(5)),
    ];
    let s = aggregate(&txns);
    assert_eq!(s.income, Decimal::MAX);
    assert_eq!(s.expenses, Decimal::from(5));
    assert_eq!(s.trend, Trend::Up);
}
