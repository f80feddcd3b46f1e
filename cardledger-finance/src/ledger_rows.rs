//! Row builder: turns parsed transactions into categorized, normalized
//! ledger rows.

use cardledger_core::{Row, Transaction};

use crate::category_rules::{CategoryOrder, KeywordMap, categorize};

/// Builds ledger rows against one keyword map and category order
pub struct RowBuilder<'a> {
    map: &'a KeywordMap,
    order: &'a CategoryOrder,
}

impl<'a> RowBuilder<'a> {
    pub fn new(map: &'a KeywordMap, order: &'a CategoryOrder) -> Self {
        Self { map, order }
    }

    /// One row per transaction, in input order.
    ///
    /// Category comes from the transaction description; credits are flipped
    /// negative so every row reads as spend.
    pub fn build(&self, txns: &[Transaction]) -> Vec<Row> {
        txns.iter()
            .map(|txn| Row::from_transaction(txn, categorize(&txn.item, self.map, self.order)))
            .collect()
    }
}
