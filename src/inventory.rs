// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FarmError, Result};
use crate::models::InventoryItem;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Name,
    Stock,
    Category,
}

impl FromStr for SortBy {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortBy::Name),
            "stock" => Ok(SortBy::Stock),
            "category" => Ok(SortBy::Category),
            other => Err(FarmError::InvalidValue {
                what: "inventory sort",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortBy,
}

/// Search matches name or description, case-insensitively. Stock sorts
/// highest first; name and category sort ascending.
pub fn query_items(items: &[InventoryItem], q: &InventoryQuery) -> Vec<InventoryItem> {
    let needle = q.search.as_deref().map(str::to_lowercase);
    let mut out: Vec<InventoryItem> = items
        .iter()
        .filter(|i| match &needle {
            Some(n) => {
                i.name.to_lowercase().contains(n)
                    || i
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(n))
            }
            None => true,
        })
        .filter(|i| q.category.as_deref().is_none_or(|c| i.category == c))
        .cloned()
        .collect();
    match q.sort {
        SortBy::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortBy::Stock => out.sort_by(|a, b| b.current_stock.cmp(&a.current_stock)),
        SortBy::Category => out.sort_by(|a, b| a.category.cmp(&b.category)),
    }
    out
}

pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|i| i.is_low_stock()).collect()
}
