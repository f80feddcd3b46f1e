use serde::{Deserialize, Serialize};

/// Header phrase printed above the transaction table on every statement page
pub const DEFAULT_TABLE_HEADER: &str = "POSTED DATE TRANSACTION DATE DESCRIPTION AMOUNT (SGD)";

/// Group labels printed inside the table, e.g. `PURCHASE`
pub const DEFAULT_SECTION_HEADINGS: [&str; 4] =
    ["PURCHASE", "REPAYMENT/CONVERSION", "CASHBACK", "GENERAL"];

/// Layout constants of a statement, overridable from config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementLayout {
    /// Phrase identifying the table header line (matched case-insensitively)
    pub header: String,
    /// Section labels dropped from the output
    pub section_headings: Vec<String>,
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self {
            header: DEFAULT_TABLE_HEADER.to_string(),
            section_headings: DEFAULT_SECTION_HEADINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl StatementLayout {
    /// True if `line` contains the table header phrase
    pub fn is_table_header(&self, line: &str) -> bool {
        line.to_uppercase().contains(&self.header.to_uppercase())
    }

    /// True if `upper` (an upper-cased line) is exactly a section label
    pub fn is_section_heading(&self, upper: &str) -> bool {
        self.section_headings
            .iter()
            .any(|h| h.trim().to_uppercase() == upper)
    }
}

/// Lines below the table header of one statement page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    /// 1-based page number in the PDF
    pub page_number: usize,
    pub lines: Vec<String>,
}
