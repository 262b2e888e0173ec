// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TxnType};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
    pub trend: Trend,
    pub trend_percent: Decimal,
}

impl Summary {
    /// `+150.0%` style label shown next to the profit figure.
    pub fn trend_label(&self) -> String {
        let pct = self
            .trend_percent
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        let sign = if self.profit >= Decimal::ZERO { "+" } else { "" };
        format!("{}{:.1}%", sign, pct)
    }
}

/// Totals saturate at `Decimal::MAX` instead of overflowing, so the summary
/// is defined for any stored amounts.
pub fn aggregate(txns: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in txns {
        let total = match t.kind() {
            TxnType::Income => &mut income,
            TxnType::Expense => &mut expenses,
        };
        *total = total.checked_add(t.amount).unwrap_or_else(|| {
            tracing::warn!(txn = t.id, "total overflowed, saturating");
            Decimal::MAX
        });
    }
    // Both totals are non-negative, so this cannot overflow.
    let profit = income - expenses;
    // Zero expenses fall back to a divisor of one.
    let divisor = if expenses.is_zero() {
        Decimal::ONE
    } else {
        expenses
    };
    let up = profit >= Decimal::ZERO;
    // A loss never exceeds the expenses, so only a profit can overflow here.
    let trend_percent = profit
        .checked_div(divisor)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX);
    Summary {
        income,
        expenses,
        profit,
        trend: if up { Trend::Up } else { Trend::Down },
        trend_percent,
    }
}
