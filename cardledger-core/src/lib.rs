//! cardledger-core: ledger types, amount parsing and errors shared by the
//! statement ingest and ledger export crates

pub mod amount;
pub mod error;
pub mod ledger;

pub use amount::{AmountMatch, AmountPattern, AMOUNT_PATTERN, parse_signed};
pub use error::{LedgerError, require_file};
pub use ledger::{RangeBand, Row, Transaction};
