//! Credit card statement table reassembler
//!
//! Rows in the extracted PDF text spill over several lines:
//!
//!   PURCHASE
//!   NTUC FAIRPRICE              <- free text before the dated line
//!   05 JAN 06 JAN SINGAPORE SG -45.30
//!   VISA 4111                   <- payment method line
//!
//! The reassembler folds these back into description / amount line pairs
//! that the ledger parser reads two at a time.

use anyhow::Result;
use cardledger_core::AmountPattern;
use regex::Regex;

use crate::types::StatementLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    /// A dated line was just read; the next line is its method line
    /// unless it is another dated line.
    ExpectMethod,
}

/// A dated row waiting for its method line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    pub posted: String,
    pub tran: String,
    pub description: String,
    /// Signed amount token, empty until one is found
    pub amount: String,
}

impl PendingRecord {
    fn header_line(&self) -> String {
        format!("{} {} {}", self.posted, self.tran, self.description)
            .trim()
            .to_string()
    }
}

/// Per-section mutable state, threaded through each line step
#[derive(Debug)]
struct SectionRun {
    state: State,
    pending: Option<PendingRecord>,
    desc_parts: Vec<String>,
    out: Vec<String>,
}

impl SectionRun {
    fn new() -> Self {
        Self {
            state: State::Scanning,
            pending: None,
            desc_parts: Vec::new(),
            out: Vec::new(),
        }
    }

    fn push_header(&mut self, record: &PendingRecord) {
        let header = record.header_line();
        if !header.is_empty() {
            self.out.push(header);
        }
    }

    /// Emit the pending record as header line plus amount line
    fn flush_pending(&mut self) {
        if let Some(record) = self.pending.take() {
            self.push_header(&record);
            if !record.amount.is_empty() {
                self.out.push(record.amount);
            }
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush_pending();
        self.out
    }
}

/// Reassembles the table lines of one statement page
#[derive(Debug, Clone)]
pub struct SectionReassembler {
    layout: StatementLayout,
    dated_row: Regex,
    page_footer: Regex,
    amount: AmountPattern,
}

impl SectionReassembler {
    pub fn new(layout: StatementLayout) -> Result<Self> {
        let dated_row = Regex::new(concat!(
            r"(?i)^(?P<posted>\d{2}\s+[A-Z]{3})\s+",
            r"(?P<tran>\d{2}\s+[A-Z]{3})\s*",
            r"(?P<rest>.*)$"
        ))?;
        let page_footer = Regex::new(r"(?i)^PAGE\s+\d+\s+OF\s+\d+$")?;

        Ok(Self {
            layout,
            dated_row,
            page_footer,
            amount: AmountPattern::new()?,
        })
    }

    /// Turn raw section lines into the flat description / amount sequence.
    ///
    /// Processing stops at the first `PAGE n OF m` footer.
    pub fn reassemble<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut run = SectionRun::new();

        for raw in lines {
            let line = raw.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if self.page_footer.is_match(line) {
                break;
            }
            self.step(&mut run, line);
        }

        run.finish()
    }

    fn step(&self, run: &mut SectionRun, line: &str) {
        if run.state == State::ExpectMethod {
            if self.dated_row.is_match(line) {
                // No method line for the previous row; the free-text buffer
                // is left as is and this line is handled as a fresh row.
                run.flush_pending();
                run.state = State::Scanning;
            } else {
                self.attach_method_line(run, line);
                return;
            }
        }

        let upper = line.to_uppercase();
        if self.layout.is_section_heading(&upper) {
            return;
        }

        if let Some(record) = self.dated_record(line, &run.desc_parts) {
            run.pending = Some(record);
            run.state = State::ExpectMethod;
            return;
        }

        run.desc_parts.push(line.to_string());
    }

    fn attach_method_line(&self, run: &mut SectionRun, line: &str) {
        let mut method_line = line.to_string();
        if let Some(record) = run.pending.take() {
            run.push_header(&record);
            if !record.amount.is_empty() && !self.amount.is_match(&method_line) {
                method_line = format!("{} {}", method_line, record.amount)
                    .trim()
                    .to_string();
            }
            run.out.push(method_line);
        }
        run.desc_parts.clear();
        run.state = State::Scanning;
    }

    fn dated_record(&self, line: &str, desc_parts: &[String]) -> Option<PendingRecord> {
        let caps = self.dated_row.captures(line)?;
        let rest = caps.name("rest").map(|m| m.as_str().trim()).unwrap_or("");

        let (extra_desc, amount) = match self.amount.last(rest) {
            Some(m) => (rest[..m.start].trim(), m.token()),
            None => (rest, String::new()),
        };

        let mut parts: Vec<&str> = desc_parts
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect();
        if !extra_desc.is_empty() {
            parts.push(extra_desc);
        }

        // date tokens are emitted upper-case; the rest keeps its printed case
        Some(PendingRecord {
            posted: caps["posted"].to_uppercase(),
            tran: caps["tran"].to_uppercase(),
            description: parts.join(" ").trim().to_string(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(lines: &[&str]) -> Vec<String> {
        SectionReassembler::new(StatementLayout::default())
            .unwrap()
            .reassemble(lines)
    }

    #[test]
    fn test_dated_row_with_method_line() {
        let out = reassemble(&[
            "PURCHASE",
            "05 JAN 06 JAN NTUC FAIRPRICE -45.30",
            "VISA 4111",
        ]);
        assert_eq!(out, vec!["05 JAN 06 JAN NTUC FAIRPRICE", "VISA 4111 -45.30"]);
    }

    #[test]
    fn test_method_line_with_own_amount_is_kept() {
        let out = reassemble(&["05 JAN 06 JAN GRAB -12.00", "CONVERTED USD -9.00"]);
        assert_eq!(out, vec!["05 JAN 06 JAN GRAB", "CONVERTED USD -9.00"]);
    }

    #[test]
    fn test_free_text_prefixes_next_dated_row() {
        let out = reassemble(&[
            "SHOPEE SINGAPORE",
            "MP",
            "10 JAN 11 JAN ONLINE - 1,234.56",
            "MASTERCARD 9999",
        ]);
        assert_eq!(
            out,
            vec![
                "10 JAN 11 JAN SHOPEE SINGAPORE MP ONLINE",
                "MASTERCARD 9999 -1,234.56"
            ]
        );
    }

    #[test]
    fn test_consecutive_dated_rows_flush_first() {
        let out = reassemble(&[
            "01 JAN 02 JAN FIRST -5.00",
            "03 JAN 04 JAN SECOND +7.50",
        ]);
        assert_eq!(
            out,
            vec!["01 JAN 02 JAN FIRST", "-5.00", "03 JAN 04 JAN SECOND", "+7.50"]
        );
    }

    #[test]
    fn test_row_without_amount_flushes_description_only() {
        let out = reassemble(&[
            "01 JAN 02 JAN NO AMOUNT YET",
            "03 JAN 04 JAN SECOND -2.00",
        ]);
        assert_eq!(
            out,
            vec!["01 JAN 02 JAN NO AMOUNT YET", "03 JAN 04 JAN SECOND", "-2.00"]
        );
    }

    #[test]
    fn test_continuation_line_then_next_dated_row() {
        let out = reassemble(&[
            "01 JAN 02 JAN FIRST MERCHANT",
            "CONTINUED TEXT",
            "03 JAN 04 JAN SECOND -2.00",
        ]);
        assert_eq!(
            out,
            vec![
                "01 JAN 02 JAN FIRST MERCHANT",
                "CONTINUED TEXT",
                "03 JAN 04 JAN SECOND",
                "-2.00"
            ]
        );
    }

    #[test]
    fn test_free_text_survives_back_to_back_dated_rows() {
        let out = reassemble(&[
            "PREFIX",
            "01 JAN 02 JAN A -1.00",
            "03 JAN 04 JAN B -2.00",
            "VISA",
        ]);
        assert_eq!(
            out,
            vec![
                "01 JAN 02 JAN PREFIX A",
                "-1.00",
                "03 JAN 04 JAN PREFIX B",
                "VISA -2.00"
            ]
        );
    }

    #[test]
    fn test_footer_stops_section_but_flushes_pending() {
        let out = reassemble(&[
            "05 JAN 06 JAN LAST ROW -3.00",
            "",
            "Page 2 of 4",
            "07 JAN 08 JAN IGNORED -1.00",
        ]);
        assert_eq!(out, vec!["05 JAN 06 JAN LAST ROW", "-3.00"]);
    }

    #[test]
    fn test_section_headings_are_dropped_case_insensitively() {
        let out = reassemble(&[
            "Repayment/Conversion",
            "15 JAN 15 JAN PAYMENT - THANK YOU +500.00",
            "Cashback",
        ]);
        // the heading after a dated row is read as its method line
        assert_eq!(
            out,
            vec!["15 JAN 15 JAN PAYMENT - THANK YOU", "Cashback +500.00"]
        );
    }

    #[test]
    fn test_lowercase_dates_are_recognized_and_upper_cased() {
        let out = reassemble(&["05 jan 06 jan kopitiam -4.20"]);
        assert_eq!(out, vec!["05 JAN 06 JAN kopitiam", "-4.20"]);

        let out = reassemble(&["11 Feb 12 feb Toast Box", "Visa 4111"]);
        assert_eq!(out, vec!["11 FEB 12 FEB Toast Box", "Visa 4111"]);
    }
}
