//! Ledger types shared by the text parser, the categorizer and the CSV writer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One statement line item as read from the line-pair text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    /// Free-text description with the date tokens stripped
    pub item: String,
    /// Signed amount, same sign convention as the statement
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(item: impl Into<String>, amount: Decimal) -> Self {
        Self {
            item: item.into(),
            amount,
        }
    }
}

/// Coarse magnitude band of an expense.
///
/// The letters are kept as the statement ledger has always used them:
/// `H` is the middle band and `M` the top one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeBand {
    /// below 10
    #[serde(rename = "L")]
    L,
    /// 10 up to 49.99
    #[serde(rename = "H")]
    H,
    /// 50 and above
    #[serde(rename = "M")]
    M,
}

impl RangeBand {
    /// Bucket an amount by its absolute value
    pub fn for_amount(amount: Decimal) -> Self {
        let value = amount.abs();
        if value >= Decimal::from(50) {
            RangeBand::M
        } else if value >= Decimal::from(10) {
            RangeBand::H
        } else {
            RangeBand::L
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeBand::L => "L",
            RangeBand::H => "H",
            RangeBand::M => "M",
        }
    }
}

impl fmt::Display for RangeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" => Ok(RangeBand::L),
            "H" | "h" => Ok(RangeBand::H),
            "M" | "m" => Ok(RangeBand::M),
            other => Err(format!("unknown range band '{other}' (expected L, H or M)")),
        }
    }
}

/// A categorized, normalized ledger row ready for export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Row {
    pub item: String,
    pub category: String,
    /// Always <= 0: spend is negative
    pub amount: Decimal,
    pub range: RangeBand,
}

impl Row {
    /// Build a row from a statement transaction.
    ///
    /// Positive amounts are flipped so every row reads as spend.
    pub fn from_transaction(txn: &Transaction, category: impl Into<String>) -> Self {
        let amount = if txn.amount > Decimal::ZERO {
            -txn.amount
        } else {
            txn.amount
        };

        Self {
            item: txn.item.clone(),
            category: category.into(),
            amount,
            range: RangeBand::for_amount(amount),
        }
    }

    /// Price text with exactly two fractional digits
    pub fn price_text(&self) -> String {
        format!("{:.2}", self.amount)
    }
}
