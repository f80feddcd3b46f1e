use anyhow::{Context, Result};
use cardledger_core::{LedgerError, require_file};
use cardledger_finance::CategoryOrder;
use cardledger_finance::category_rules::DEFAULT_CATEGORY_ORDER;
use cardledger_ingest::StatementLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "cardledger.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub statement: StatementLayout,
    pub categories: CategoriesSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesSection {
    /// Priority order; categories missing here never match
    pub order: Vec<String>,
    /// Keyword map used when `--map` is not given
    pub map: PathBuf,
}

impl Default for CategoriesSection {
    fn default() -> Self {
        Self {
            order: DEFAULT_CATEGORY_ORDER.iter().map(|s| s.to_string()).collect(),
            map: PathBuf::from("map.json"),
        }
    }
}

impl Config {
    pub fn category_order(&self) -> CategoryOrder {
        CategoryOrder::new(self.categories.order.iter().cloned())
    }

    /// `--map` if given, else the configured keyword map
    pub fn map_path(&self, cli_map: Option<PathBuf>) -> PathBuf {
        cli_map.unwrap_or_else(|| self.categories.map.clone())
    }
}

/// Load config from `explicit` (must exist), else `./cardledger.toml` if
/// present, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            require_file(path)?;
            read_config(path)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).map_err(|e| {
        LedgerError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Write the default config to `path` unless a file is already there
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
