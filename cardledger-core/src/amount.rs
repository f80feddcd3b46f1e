//! Signed statement amounts: `-12.00`, `+ 1,234.56`.
//!
//! Statements print a sign character in front of every amount, optionally
//! followed by whitespace, then digits with thousands separators and exactly
//! two fraction digits.

use anyhow::Result;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const AMOUNT_PATTERN: &str = r"([+-])\s*([\d,]+\.\d{2})";

/// Compiled amount pattern
#[derive(Debug, Clone)]
pub struct AmountPattern {
    re: Regex,
}

/// One amount found inside a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountMatch<'t> {
    pub sign: &'t str,
    pub digits: &'t str,
    /// Byte offset of the sign character
    pub start: usize,
}

impl AmountMatch<'_> {
    /// Sign and number with any whitespace between them removed
    pub fn token(&self) -> String {
        format!("{}{}", self.sign, self.digits)
    }

    pub fn value(&self) -> Decimal {
        parse_signed(self.sign, self.digits)
    }
}

impl AmountPattern {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(AMOUNT_PATTERN)?,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    pub fn first<'t>(&self, text: &'t str) -> Option<AmountMatch<'t>> {
        self.re.captures(text).map(to_match)
    }

    pub fn last<'t>(&self, text: &'t str) -> Option<AmountMatch<'t>> {
        self.re.captures_iter(text).last().map(to_match)
    }
}

fn to_match(caps: regex::Captures<'_>) -> AmountMatch<'_> {
    let whole = caps.get(0).map(|m| m.start()).unwrap_or(0);
    AmountMatch {
        sign: caps.get(1).map(|m| m.as_str()).unwrap_or("+"),
        digits: caps.get(2).map(|m| m.as_str()).unwrap_or(""),
        start: whole,
    }
}

/// Parse `digits` (thousands separators allowed) with the given sign.
///
/// Text that does not form a valid decimal yields zero.
pub fn parse_signed(sign: &str, digits: &str) -> Decimal {
    let value = Decimal::from_str(&digits.replace(',', "")).unwrap_or(Decimal::ZERO);
    if sign == "-" { -value } else { value }
}
