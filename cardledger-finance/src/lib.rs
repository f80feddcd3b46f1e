//! cardledger-finance: statement text parser, keyword categorizer, ledger
//! row builder, CSV export, row listing and category summary

pub mod category_rules;
pub mod csv_export;
pub mod export;
pub mod ledger_rows;
pub mod listing;
pub mod pipeline;
pub mod summary;
pub mod text_parser;

pub use category_rules::{
    CategoryOrder, FALLBACK_CATEGORY, KeywordMap, categorize, load_keyword_map,
};
pub use csv_export::{write_csv, write_rows};
pub use export::{default_csv_path, export_statement_csv, statement_rows};
pub use ledger_rows::RowBuilder;
pub use listing::{RowFilter, SortKey, sort_rows};
pub use pipeline::{Conversion, ConvertTargets, convert_statement_pdf};
pub use summary::{CategorySummary, CategoryTotal, summarize};
pub use text_parser::{parse_statement_text, parse_transactions, read_lines};
