//! PDF page text extraction and table-section location.

use anyhow::Result;
use cardledger_core::LedgerError;
use tracing::debug;

use crate::types::{PageSection, StatementLayout};

/// Backend turning PDF bytes into one text blob per page
pub trait PageExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>>;
}

/// Extraction backed by the `pdf-extract` crate, one string per page
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractPages;

impl PageExtractor for PdfExtractPages {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| LedgerError::PdfExtraction(e.to_string()))?;
        Ok(pages)
    }
}

/// Keep, per page, the trimmed lines strictly after the table header.
///
/// Pages with no text or without the header are skipped; whatever
/// transactions they hold are not recovered.
pub fn locate_sections(pages: &[String], layout: &StatementLayout) -> Vec<PageSection> {
    let mut sections = Vec::new();

    for (idx, text) in pages.iter().enumerate() {
        let page_number = idx + 1;
        if text.is_empty() {
            continue;
        }

        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let Some(header_idx) = lines.iter().position(|l| layout.is_table_header(l)) else {
            debug!(page = page_number, "no transaction table header, page skipped");
            continue;
        };

        sections.push(PageSection {
            page_number,
            lines: lines[header_idx + 1..].iter().map(|l| l.to_string()).collect(),
        });
    }

    sections
}
