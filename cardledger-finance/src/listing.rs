//! Narrow and order ledger rows for display.
//!
//! Price here is the spend magnitude `|amount|`, so `--min-price 10` keeps
//! a `-45.30` row.

use cardledger_core::{RangeBand, Row};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;

/// Row filter; an unset option or empty list lets every row through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Case-insensitive substring of the item or the category
    pub search: Option<String>,
    pub categories: Vec<String>,
    pub ranges: Vec<RangeBand>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl RowFilter {
    pub fn matches(&self, row: &Row) -> bool {
        let term = self
            .search
            .as_deref()
            .map(|s| s.trim().to_uppercase())
            .unwrap_or_default();
        if !term.is_empty()
            && !row.item.to_uppercase().contains(&term)
            && !row.category.to_uppercase().contains(&term)
        {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&row.category) {
            return false;
        }
        if !self.ranges.is_empty() && !self.ranges.contains(&row.range) {
            return false;
        }

        let price = row.amount.abs();
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }
        true
    }

    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Item,
    Category,
    Price,
    Range,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" => Ok(SortKey::Item),
            "category" => Ok(SortKey::Category),
            "price" => Ok(SortKey::Price),
            "range" => Ok(SortKey::Range),
            other => Err(format!(
                "unknown sort key '{other}' (expected item, category, price or range)"
            )),
        }
    }
}

impl SortKey {
    fn compare(self, a: &Row, b: &Row) -> Ordering {
        match self {
            SortKey::Item => a.item.to_lowercase().cmp(&b.item.to_lowercase()),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortKey::Price => a.amount.abs().cmp(&b.amount.abs()),
            SortKey::Range => a.range.cmp(&b.range),
        }
    }
}

/// Stable sort; ties keep statement order in both directions
pub fn sort_rows(rows: &mut [Row], key: SortKey, descending: bool) {
    rows.sort_by(|a, b| {
        let ord = key.compare(a, b);
        if descending { ord.reverse() } else { ord }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardledger_core::Transaction;
    use rust_decimal_macros::dec;

    fn rows() -> Vec<Row> {
        [
            ("NTUC FAIRPRICE", dec!(-45.30), "grocery"),
            ("kopi corner", dec!(-4.20), "food"),
            ("CHANGI AIRPORT", dec!(-1050.00), "others"),
            ("GRAB RIDE", dec!(-12.40), "Transport"),
            ("TOAST BOX", dec!(-12.40), "food"),
        ]
        .into_iter()
        .map(|(item, amount, category)| {
            Row::from_transaction(&Transaction::new(item, amount), category)
        })
        .collect()
    }

    fn items(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.item.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        assert_eq!(RowFilter::default().apply(&rows()), rows());
    }

    #[test]
    fn test_search_hits_item_or_category() {
        let filter = RowFilter {
            search: Some("  Kopi ".to_string()),
            ..Default::default()
        };
        assert_eq!(items(&filter.apply(&rows())), vec!["kopi corner"]);

        let filter = RowFilter {
            search: Some("transp".to_string()),
            ..Default::default()
        };
        assert_eq!(items(&filter.apply(&rows())), vec!["GRAB RIDE"]);
    }

    #[test]
    fn test_category_and_range_filters() {
        let filter = RowFilter {
            categories: vec!["food".to_string()],
            ranges: vec![RangeBand::H],
            ..Default::default()
        };
        assert_eq!(items(&filter.apply(&rows())), vec!["TOAST BOX"]);
    }

    #[test]
    fn test_price_bounds_use_magnitude_inclusively() {
        let filter = RowFilter {
            min_price: Some(dec!(12.40)),
            max_price: Some(dec!(45.30)),
            ..Default::default()
        };
        assert_eq!(
            items(&filter.apply(&rows())),
            vec!["NTUC FAIRPRICE", "GRAB RIDE", "TOAST BOX"]
        );
    }

    #[test]
    fn test_sort_by_price_is_stable_both_ways() {
        let mut asc = rows();
        sort_rows(&mut asc, SortKey::Price, false);
        assert_eq!(
            items(&asc),
            vec!["kopi corner", "GRAB RIDE", "TOAST BOX", "NTUC FAIRPRICE", "CHANGI AIRPORT"]
        );

        let mut desc = rows();
        sort_rows(&mut desc, SortKey::Price, true);
        assert_eq!(
            items(&desc),
            vec!["CHANGI AIRPORT", "NTUC FAIRPRICE", "GRAB RIDE", "TOAST BOX", "kopi corner"]
        );
    }

    #[test]
    fn test_sort_by_item_ignores_case() {
        let mut sorted = rows();
        sort_rows(&mut sorted, SortKey::Item, false);
        assert_eq!(
            items(&sorted),
            vec!["CHANGI AIRPORT", "GRAB RIDE", "kopi corner", "NTUC FAIRPRICE", "TOAST BOX"]
        );
    }

    #[test]
    fn test_sort_by_range_and_category() {
        let mut sorted = rows();
        sort_rows(&mut sorted, SortKey::Range, false);
        let bands: Vec<_> = sorted.iter().map(|r| r.range).collect();
        assert_eq!(
            bands,
            vec![RangeBand::L, RangeBand::H, RangeBand::H, RangeBand::H, RangeBand::M]
        );

        sort_rows(&mut sorted, SortKey::Category, false);
        assert_eq!(sorted[0].category, "food");
        assert_eq!(sorted[4].category, "Transport");
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("Price".parse::<SortKey>(), Ok(SortKey::Price));
        assert!("amount".parse::<SortKey>().is_err());
    }
}
