// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FarmError, Result};
use crate::finance::{PeriodSelector, Summary};
use crate::models::{Farm, Transaction};
use crate::utils::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_PAGE_ROWS, fmt_money};
use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

pub const HEADERS: [&str; 6] = ["Date", "Type", "Category", "Amount", "Farm", "Description"];
pub const ALL_FARMS: &str = "All Farms";
const PAGE_BREAK: char = '\u{000C}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Document,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Document => "txt",
        }
    }

    pub fn date_format(self) -> &'static str {
        match self {
            ExportFormat::Csv => "%Y-%m-%d",
            ExportFormat::Document => "%d/%m/%Y",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" | "document" | "doc" => Ok(ExportFormat::Document),
            other => Err(FarmError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub farm: String,
    pub description: String,
}

impl ReportRow {
    pub fn fields(&self) -> [&str; 6] {
        [
            self.date.as_str(),
            self.kind.as_str(),
            self.category.as_str(),
            self.amount.as_str(),
            self.farm.as_str(),
            self.description.as_str(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub currency_symbol: String,
    pub page_rows: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            page_rows: DEFAULT_PAGE_ROWS,
        }
    }
}

/// One row per transaction, in input order, shaped for `format`.
pub fn to_rows(
    txns: &[Transaction],
    farms: &[Farm],
    format: ExportFormat,
    currency_symbol: &str,
) -> Vec<ReportRow> {
    txns.iter()
        .map(|t| {
            let farm = t
                .farm_id
                .and_then(|id| farms.iter().find(|f| f.id == id));
            if let (None, Some(id)) = (farm, t.farm_id) {
                tracing::warn!(txn = t.id, farm_id = id, "farm not found, using All Farms");
            }
            let farm = match (farm, format) {
                (Some(f), ExportFormat::Csv) => format!("{} - {}", f.name, f.location),
                (Some(f), ExportFormat::Document) => f.name.clone(),
                (None, _) => ALL_FARMS.to_string(),
            };
            let amount = match format {
                ExportFormat::Csv => format!("{:.2}", t.amount),
                ExportFormat::Document => fmt_money(&t.amount, currency_symbol),
            };
            ReportRow {
                date: t.date.format(format.date_format()).to_string(),
                kind: t.kind().label().to_string(),
                category: t.category.label(),
                amount,
                farm,
                description: t.description.clone().unwrap_or_default(),
            }
        })
        .collect()
}

/// Header line unquoted, every data field quoted, `\n` after every line.
pub fn render_csv(rows: &[ReportRow]) -> Result<String> {
    let mut out = HEADERS.join(",");
    out.push('\n');
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for r in rows {
        wtr.write_record(r.fields())
            .map_err(|e| FarmError::Export(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| FarmError::Export(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| FarmError::Export(e.to_string()))?;
    out.push_str(&body);
    Ok(out)
}

fn page_table(rows: &[ReportRow]) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(HEADERS.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.fields().into_iter().map(Cell::new));
    }
    if let Some(col) = t.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    t
}

/// Paginated report: title, period, the three totals, then the rows split
/// into tables of at most `page_rows` rows separated by form feeds.
pub fn render_document(
    rows: &[ReportRow],
    summary: &Summary,
    selector: &PeriodSelector,
    options: &ReportOptions,
) -> String {
    let sym = options.currency_symbol.as_str();
    let mut out = String::new();
    out.push_str("Financial Report\n");
    out.push_str(&format!("Period: {}\n", selector.label()));
    out.push_str(&format!("Total Income: {}\n", fmt_money(&summary.income, sym)));
    out.push_str(&format!(
        "Total Expenses: {}\n",
        fmt_money(&summary.expenses, sym)
    ));
    out.push_str(&format!("Net Profit: {}\n", fmt_money(&summary.profit, sym)));

    let per_page = options.page_rows.max(1);
    let pages: Vec<&[ReportRow]> = if rows.is_empty() {
        vec![rows]
    } else {
        rows.chunks(per_page).collect()
    };
    let total = pages.len();
    for (i, page) in pages.into_iter().enumerate() {
        if i > 0 {
            out.push(PAGE_BREAK);
        }
        out.push_str(&format!("\nPage {} of {}\n", i + 1, total));
        out.push_str(&page_table(page).to_string());
        out.push('\n');
    }
    out
}

pub fn default_file_name(format: ExportFormat, today: NaiveDate) -> String {
    format!(
        "financial-report-{}.{}",
        today.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Renders the complete report before touching the file system, so a failed
/// export never leaves a partial file.
pub fn export_report(
    path: &Path,
    format: ExportFormat,
    rows: &[ReportRow],
    summary: &Summary,
    selector: &PeriodSelector,
    options: &ReportOptions,
) -> Result<()> {
    let body = match format {
        ExportFormat::Csv => render_csv(rows)?,
        ExportFormat::Document => render_document(rows, summary, selector, options),
    };
    if let Err(e) = std::fs::write(path, body) {
        let _ = std::fs::remove_file(path);
        return Err(FarmError::Export(format!("{}: {}", path.display(), e)));
    }
    tracing::info!(path = %path.display(), rows = rows.len(), "report exported");
    Ok(())
}
