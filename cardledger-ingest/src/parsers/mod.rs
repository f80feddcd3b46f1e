//! Bank-specific statement table parsers.

pub mod mari_credit_card;

pub use mari_credit_card::{PendingRecord, SectionReassembler};
