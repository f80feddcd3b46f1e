//! Parse line-pair statement text into transactions.
//!
//! The text alternates description and amount lines:
//!
//!   05 JAN 06 JAN NTUC FAIRPRICE
//!   VISA 4111 -45.30
//!
//! Date tokens in front of the description are dropped. An amount line
//! with no `+`/`-` amount reads as zero.

use anyhow::{Context, Result};
use cardledger_core::{AmountPattern, Transaction};
use regex::Regex;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

/// Read a text file as trimmed, non-blank lines
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Pair up description and amount lines.
///
/// A trailing description without an amount line gets amount zero.
pub fn parse_transactions<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Transaction>> {
    let dated_item = Regex::new(concat!(
        r"(?i)^(?P<posted>\d{2}\s+[A-Z]{3})\s+",
        r"(?P<tran>\d{2}\s+[A-Z]{3})\s+",
        r"(?P<rest>.*)$"
    ))?;
    let amount = AmountPattern::new()?;

    let mut txns = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let desc_line = lines[index].as_ref().trim();
        if desc_line.is_empty() {
            index += 1;
            continue;
        }

        let amount_line = lines
            .get(index + 1)
            .map(|l| l.as_ref().trim())
            .unwrap_or("");

        let item = match dated_item.captures(desc_line) {
            Some(caps) => caps["rest"].trim().to_string(),
            None => desc_line.to_string(),
        };
        let value = amount
            .first(amount_line)
            .map(|m| m.value())
            .unwrap_or(Decimal::ZERO);

        txns.push(Transaction::new(item, value));
        index += 2;
    }

    Ok(txns)
}

/// Read and parse a line-pair statement text file
pub fn parse_statement_text(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let lines = read_lines(path)?;
    parse_transactions(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_dated_pairs() {
        let txns = parse_transactions(&["05 JAN 06 JAN NTUC FAIRPRICE", "-45.30"]).unwrap();
        assert_eq!(txns, vec![Transaction::new("NTUC FAIRPRICE", dec!(-45.30))]);
    }

    #[test]
    fn test_amount_signs() {
        let txns = parse_transactions(&[
            "A", "+1,234.56",
            "B", "-12.00",
            "C", "no amount here",
            "D", "-1,050.00",
        ])
        .unwrap();
        let amounts: Vec<_> = txns.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![dec!(1234.56), dec!(-12.00), dec!(0), dec!(-1050.00)]);
    }

    #[test]
    fn test_method_line_amount_uses_first_match() {
        let txns = parse_transactions(&[
            "10 JAN 11 JAN SHOPEE",
            "MASTERCARD 9999 - 1,234.56 +3.00",
        ])
        .unwrap();
        assert_eq!(txns[0].item, "SHOPEE");
        assert_eq!(txns[0].amount, dec!(-1234.56));
    }

    #[test]
    fn test_undated_description_kept_whole() {
        let txns = parse_transactions(&["CONTINUED TEXT", "+5.00"]).unwrap();
        assert_eq!(txns[0].item, "CONTINUED TEXT");
        // dates with nothing after them are not stripped
        let txns = parse_transactions(&["05 JAN 06 JAN", "-1.00"]).unwrap();
        assert_eq!(txns[0].item, "05 JAN 06 JAN");
    }

    #[test]
    fn test_odd_line_count_defaults_amount() {
        let txns = parse_transactions(&["01 JAN 02 JAN A", "-1.00", "03 JAN 04 JAN B"]).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[1].item, "B");
        assert_eq!(txns[1].amount, Decimal::ZERO);
    }

    #[test]
    fn test_lowercase_dates_stripped() {
        let txns = parse_transactions(&["05 jan 06 jan kopitiam", "-4.20"]).unwrap();
        assert_eq!(txns[0].item, "kopitiam");
    }

    #[test]
    fn test_read_lines_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stmt.txt");
        fs::write(&path, "  05 JAN 06 JAN A  \n\n\r\n-1.00\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["05 JAN 06 JAN A", "-1.00"]);
    }
}
