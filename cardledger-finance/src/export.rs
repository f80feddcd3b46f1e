//! Stage two of the pipeline: line-pair text to categorized CSV.

use anyhow::Result;
use cardledger_core::{Row, require_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::category_rules::{CategoryOrder, load_keyword_map};
use crate::csv_export::write_csv;
use crate::ledger_rows::RowBuilder;
use crate::text_parser::parse_statement_text;

/// `statement.txt` -> `statement.csv`
pub fn default_csv_path(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

/// Parse, categorize and normalize a statement text file.
///
/// Both files must exist; a missing one aborts before anything is read.
pub fn statement_rows(input: &Path, map_path: &Path, order: &CategoryOrder) -> Result<Vec<Row>> {
    require_file(input)?;
    require_file(map_path)?;

    let txns = parse_statement_text(input)?;
    let map = load_keyword_map(map_path)?;
    debug!(transactions = txns.len(), "parsed statement text");

    Ok(RowBuilder::new(&map, order).build(&txns))
}

/// Convert statement text into the expense CSV at `output`.
///
/// Returns the rows written. The output file is only touched once every
/// row has been built.
pub fn export_statement_csv(
    input: &Path,
    map_path: &Path,
    output: &Path,
    order: &CategoryOrder,
) -> Result<Vec<Row>> {
    let rows = statement_rows(input, map_path, order)?;
    write_csv(output, &rows)?;
    info!(path = %output.display(), rows = rows.len(), "wrote ledger csv");
    Ok(rows)
}
