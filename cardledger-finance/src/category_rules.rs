//! Deterministic keyword rules mapping statement descriptions to spending
//! categories.
//!
//! Categories are tried in a fixed priority order; within a category the
//! keywords are tried in file order. The first keyword found as a substring
//! of the upper-cased description decides. Nothing found -> `others`.

use anyhow::{Context, Result, bail};
use cardledger_core::LedgerError;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Category assigned when no keyword matches
pub const FALLBACK_CATEGORY: &str = "others";

pub const DEFAULT_CATEGORY_ORDER: [&str; 11] = [
    "food",
    "grocery",
    "utilities",
    "broadband",
    "online shopping",
    "online purchases",
    "Entertainment",
    "Transport",
    "Private Hire",
    "Equipment",
    "Toys",
];

/// Priority order in which categories are consulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    names: Vec<String>,
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_ORDER)
    }
}

impl CategoryOrder {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Category name -> upper-cased keywords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMap {
    categories: HashMap<String, Vec<String>>,
}

impl KeywordMap {
    /// Parse a `{"category": ["keyword", ...]}` JSON document.
    ///
    /// Entries whose value is not an array are dropped. Array elements are
    /// trimmed and upper-cased; blank ones are dropped.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(entries) = value else {
            bail!("expected a JSON object of category -> keyword list");
        };

        let mut map = KeywordMap::default();
        for (category, values) in entries {
            if let Value::Array(items) = values {
                map.insert(category, items.iter().map(keyword_text));
            }
        }
        Ok(map)
    }

    /// Add or replace a category, normalizing its keywords
    pub fn insert<I, S>(&mut self, category: impl Into<String>, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_uppercase())
            .filter(|k| !k.is_empty())
            .collect();
        self.categories.insert(category.into(), normalized);
    }

    pub fn keywords(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn keyword_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Load the keyword map file
pub fn load_keyword_map(path: impl AsRef<Path>) -> Result<KeywordMap> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    KeywordMap::from_json(&text).map_err(|e| {
        LedgerError::Mapping {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Categorize a description: first category in `order` with a matching
/// keyword, else [`FALLBACK_CATEGORY`].
pub fn categorize<'a>(item: &str, map: &KeywordMap, order: &'a CategoryOrder) -> &'a str {
    let upper = item.to_uppercase();

    for category in order.iter() {
        if map
            .keywords(category)
            .iter()
            .any(|keyword| !keyword.is_empty() && upper.contains(keyword.as_str()))
        {
            return category;
        }
    }

    FALLBACK_CATEGORY
}
