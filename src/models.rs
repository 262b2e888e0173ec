// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FarmError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Income,
    Expense,
}

impl TxnType {
    pub fn slug(self) -> &'static str {
        match self {
            TxnType::Income => "income",
            TxnType::Expense => "expense",
        }
    }

    /// Capitalised form used in reports.
    pub fn label(self) -> &'static str {
        match self {
            TxnType::Income => "Income",
            TxnType::Expense => "Expense",
        }
    }
}

impl FromStr for TxnType {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxnType::Income),
            "expense" | "expenses" => Ok(TxnType::Expense),
            other => Err(FarmError::InvalidValue {
                what: "transaction type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeCategory {
    CropSales,
    Livestock,
    EquipmentRental,
    Subsidies,
    OtherIncome,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 5] = [
        IncomeCategory::CropSales,
        IncomeCategory::Livestock,
        IncomeCategory::EquipmentRental,
        IncomeCategory::Subsidies,
        IncomeCategory::OtherIncome,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            IncomeCategory::CropSales => "crop-sales",
            IncomeCategory::Livestock => "livestock",
            IncomeCategory::EquipmentRental => "equipment-rental",
            IncomeCategory::Subsidies => "subsidies",
            IncomeCategory::OtherIncome => "other-income",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    Seeds,
    Fertilizers,
    Equipment,
    Labor,
    Fuel,
    Supplies,
    Maintenance,
    OtherExpense,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Seeds,
        ExpenseCategory::Fertilizers,
        ExpenseCategory::Equipment,
        ExpenseCategory::Labor,
        ExpenseCategory::Fuel,
        ExpenseCategory::Supplies,
        ExpenseCategory::Maintenance,
        ExpenseCategory::OtherExpense,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ExpenseCategory::Seeds => "seeds",
            ExpenseCategory::Fertilizers => "fertilizers",
            ExpenseCategory::Equipment => "equipment",
            ExpenseCategory::Labor => "labor",
            ExpenseCategory::Fuel => "fuel",
            ExpenseCategory::Supplies => "supplies",
            ExpenseCategory::Maintenance => "maintenance",
            ExpenseCategory::OtherExpense => "other-expense",
        }
    }
}

/// A transaction category. The variant fixes the transaction type, so an
/// income category can never be attached to an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "category", rename_all = "lowercase")]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    pub fn kind(self) -> TxnType {
        match self {
            Category::Income(_) => TxnType::Income,
            Category::Expense(_) => TxnType::Expense,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Income(c) => c.slug(),
            Category::Expense(c) => c.slug(),
        }
    }

    pub fn label(self) -> String {
        crate::utils::humanize_slug(self.slug())
    }

    pub fn parse(kind: TxnType, slug: &str) -> Result<Category> {
        let slug = slug.trim().to_lowercase();
        let found = match kind {
            TxnType::Income => IncomeCategory::ALL
                .into_iter()
                .find(|c| c.slug() == slug)
                .map(Category::Income),
            TxnType::Expense => ExpenseCategory::ALL
                .into_iter()
                .find(|c| c.slug() == slug)
                .map(Category::Expense),
        };
        found.ok_or_else(|| FarmError::InvalidCategory {
            kind: kind.slug().to_string(),
            slug,
        })
    }

    pub fn slugs_for(kind: TxnType) -> Vec<&'static str> {
        match kind {
            TxnType::Income => IncomeCategory::ALL.iter().map(|c| c.slug()).collect(),
            TxnType::Expense => ExpenseCategory::ALL.iter().map(|c| c.slug()).collect(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub name: String,
    pub location: String,
}

/// Largest accepted transaction amount, in whole currency units.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub farm_id: Option<i64>,
    pub category: Category,
    pub amount: Decimal, // always stored sign-less
    pub date: NaiveDateTime,
    pub description: Option<String>,
    pub images: Vec<ImageRecord>,
}

impl Transaction {
    /// Builds an unsaved transaction (id 0), rejecting negative amounts and
    /// amounts above `MAX_AMOUNT`.
    pub fn new(category: Category, amount: Decimal, date: NaiveDateTime) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(FarmError::NegativeAmount(amount));
        }
        if amount > Decimal::from(MAX_AMOUNT) {
            return Err(FarmError::InvalidValue {
                what: "amount",
                value: amount.to_string(),
            });
        }
        Ok(Transaction {
            id: 0,
            farm_id: None,
            category,
            amount,
            date,
            description: None,
            images: Vec::new(),
        })
    }

    pub fn kind(&self) -> TxnType {
        self.category.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeUnit {
    Acres,
    Hectares,
    SquareFeet,
    SquareMeters,
}

impl SizeUnit {
    pub fn slug(self) -> &'static str {
        match self {
            SizeUnit::Acres => "acres",
            SizeUnit::Hectares => "hectares",
            SizeUnit::SquareFeet => "square-feet",
            SizeUnit::SquareMeters => "square-meters",
        }
    }
}

impl FromStr for SizeUnit {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "acres" => Ok(SizeUnit::Acres),
            "hectares" => Ok(SizeUnit::Hectares),
            "square-feet" => Ok(SizeUnit::SquareFeet),
            "square-meters" => Ok(SizeUnit::SquareMeters),
            other => Err(FarmError::InvalidValue {
                what: "size unit",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub size: Decimal,
    pub size_unit: SizeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    Planted,
    Growing,
    Ready,
    Harvested,
}

impl CropStatus {
    pub fn slug(self) -> &'static str {
        match self {
            CropStatus::Planted => "planted",
            CropStatus::Growing => "growing",
            CropStatus::Ready => "ready",
            CropStatus::Harvested => "harvested",
        }
    }
}

impl FromStr for CropStatus {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "planted" => Ok(CropStatus::Planted),
            "growing" => Ok(CropStatus::Growing),
            "ready" => Ok(CropStatus::Ready),
            "harvested" => Ok(CropStatus::Harvested),
            other => Err(FarmError::InvalidValue {
                what: "crop status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: i64,
    pub farm_id: i64,
    pub crop_type: String,
    pub field: String,
    pub planting_date: NaiveDate,
    pub expected_harvest: NaiveDate,
    pub status: CropStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Watering,
    Fertilizing,
    Harvesting,
    Planting,
    Weeding,
    Inspection,
    Maintenance,
    Other,
}

impl TaskType {
    pub fn slug(self) -> &'static str {
        match self {
            TaskType::Watering => "watering",
            TaskType::Fertilizing => "fertilizing",
            TaskType::Harvesting => "harvesting",
            TaskType::Planting => "planting",
            TaskType::Weeding => "weeding",
            TaskType::Inspection => "inspection",
            TaskType::Maintenance => "maintenance",
            TaskType::Other => "other",
        }
    }
}

impl FromStr for TaskType {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "watering" => Ok(TaskType::Watering),
            "fertilizing" => Ok(TaskType::Fertilizing),
            "harvesting" => Ok(TaskType::Harvesting),
            "planting" => Ok(TaskType::Planting),
            "weeding" => Ok(TaskType::Weeding),
            "inspection" => Ok(TaskType::Inspection),
            "maintenance" => Ok(TaskType::Maintenance),
            "other" => Ok(TaskType::Other),
            other => Err(FarmError::InvalidValue {
                what: "task type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub farm_id: i64,
    pub crop_id: Option<i64>,
    pub title: String,
    pub task_type: TaskType,
    pub due_date: NaiveDate,
    pub notes: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub unit: String,
    pub cost_per_unit: Decimal,
    pub supplier: Option<String>,
    pub description: Option<String>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.reorder_level
    }
}
