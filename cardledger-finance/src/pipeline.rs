//! Both stages in one run: statement PDF straight to the expense CSV.

use anyhow::{Context, Result};
use cardledger_core::{Row, require_file};
use cardledger_ingest::{PageExtractor, StatementLayout, statement_lines, write_line_pairs};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::category_rules::{CategoryOrder, load_keyword_map};
use crate::csv_export::write_csv;
use crate::ledger_rows::RowBuilder;
use crate::text_parser::parse_transactions;

/// Where a PDF conversion writes its results
#[derive(Debug, Clone, Copy)]
pub struct ConvertTargets<'a> {
    pub csv: &'a Path,
    /// Intermediate line-pair text, written only when set
    pub txt: Option<&'a Path>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Description / amount pairs recovered from the PDF
    pub transactions: usize,
    pub rows: Vec<Row>,
}

/// Convert a statement PDF into the expense CSV without a text round trip.
///
/// Every input is read and every row built before the first write, so an
/// abort (missing file, malformed map, no transactions) leaves no output.
pub fn convert_statement_pdf(
    pdf: &Path,
    map_path: &Path,
    targets: ConvertTargets<'_>,
    extractor: &dyn PageExtractor,
    layout: &StatementLayout,
    order: &CategoryOrder,
) -> Result<Conversion> {
    require_file(pdf)?;
    require_file(map_path)?;

    let keywords = load_keyword_map(map_path)?;
    let bytes = fs::read(pdf).with_context(|| format!("read {}", pdf.display()))?;
    let lines = statement_lines(&bytes, extractor, layout)?;
    let txns = parse_transactions(&lines)?;
    let rows = RowBuilder::new(&keywords, order).build(&txns);

    if let Some(txt) = targets.txt {
        write_line_pairs(txt, &lines)?;
        info!(path = %txt.display(), "wrote statement text");
    }
    write_csv(targets.csv, &rows)?;
    info!(path = %targets.csv.display(), rows = rows.len(), "wrote ledger csv");

    Ok(Conversion {
        transactions: lines.len() / 2,
        rows,
    })
}
