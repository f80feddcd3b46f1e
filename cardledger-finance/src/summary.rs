//! Per-category spend totals over ledger rows.

use cardledger_core::{RangeBand, Row};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::category_rules::{CategoryOrder, FALLBACK_CATEGORY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Categories in priority order, `others` last; empty ones omitted
    pub categories: Vec<CategoryTotal>,
    pub total: Decimal,
    pub rows: usize,
    /// Spend in `food` that falls in the `H` band
    pub food_range_h: Decimal,
}

/// Total rows per category
pub fn summarize(rows: &[Row], order: &CategoryOrder) -> CategorySummary {
    let mut names: Vec<&str> = Vec::new();
    for name in order.iter().filter(|n| *n != FALLBACK_CATEGORY) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names.push(FALLBACK_CATEGORY);

    let categories = names
        .into_iter()
        .filter_map(|name| {
            let matching: Vec<&Row> = rows.iter().filter(|r| r.category == name).collect();
            if matching.is_empty() {
                return None;
            }
            Some(CategoryTotal {
                category: name.to_string(),
                total: matching.iter().map(|r| r.amount).sum(),
                count: matching.len(),
            })
        })
        .collect();

    CategorySummary {
        categories,
        total: rows.iter().map(|r| r.amount).sum(),
        rows: rows.len(),
        food_range_h: rows
            .iter()
            .filter(|r| r.category == "food" && r.range == RangeBand::H)
            .map(|r| r.amount)
            .sum(),
    }
}
