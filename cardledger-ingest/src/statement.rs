//! Stage one of the pipeline: statement PDF to line-pair text.

use anyhow::{Context, Result};
use cardledger_core::{LedgerError, require_file};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::extract::{PageExtractor, locate_sections};
use crate::parsers::SectionReassembler;
use crate::types::StatementLayout;

/// Extract and reassemble every table section of a statement.
///
/// Fails with [`LedgerError::NoTransactions`] if nothing was recovered.
pub fn statement_lines(
    pdf_bytes: &[u8],
    extractor: &dyn PageExtractor,
    layout: &StatementLayout,
) -> Result<Vec<String>> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    debug!(pages = pages.len(), "extracted page text");

    let sections = locate_sections(&pages, layout);
    let reassembler = SectionReassembler::new(layout.clone())?;

    let mut out = Vec::new();
    for section in &sections {
        let lines = reassembler.reassemble(&section.lines);
        debug!(
            page = section.page_number,
            raw = section.lines.len(),
            emitted = lines.len(),
            "reassembled section"
        );
        out.extend(lines);
    }

    if out.is_empty() {
        return Err(LedgerError::NoTransactions.into());
    }
    Ok(out)
}

/// Write lines one per row with a trailing newline
pub fn write_line_pairs(path: &Path, lines: &[String]) -> Result<()> {
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// `statement.pdf` -> `statement.txt`
pub fn default_txt_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Convert a statement PDF into line-pair text at `output`.
///
/// Returns the number of transactions (line pairs) written. Nothing is
/// written when the input is missing or yields no transactions.
pub fn convert_pdf_to_txt(
    input: &Path,
    output: &Path,
    extractor: &dyn PageExtractor,
    layout: &StatementLayout,
) -> Result<usize> {
    require_file(input)?;
    let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;

    let lines = statement_lines(&bytes, extractor, layout)?;
    write_line_pairs(output, &lines)?;

    let count = lines.len() / 2;
    info!(path = %output.display(), transactions = count, "wrote statement text");
    Ok(count)
}
