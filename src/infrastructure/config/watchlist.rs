//! Watch list sources: inline entries and an optional JSON lookup file.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{WatchListEntry, DEFAULT_MIN_MARKET_CAP};
use crate::error::ConfigError;

/// `[watchlist]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistConfig {
    /// Instruments must have a market cap strictly above this value.
    #[serde(default = "default_min_market_cap")]
    pub min_market_cap: Decimal,
    /// JSON stock lookup file, relative to the config file's directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Inline entries. These take precedence over file entries with the
    /// same code.
    #[serde(default)]
    pub entries: Vec<WatchListEntry>,
}

fn default_min_market_cap() -> Decimal {
    DEFAULT_MIN_MARKET_CAP
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            min_market_cap: default_min_market_cap(),
            file: None,
            entries: Vec::new(),
        }
    }
}

/// Accepted shapes of the lookup file.
#[derive(Deserialize)]
#[serde(untagged)]
enum LookupFile {
    List(Vec<WatchListEntry>),
    Wrapped {
        #[serde(rename = "StockLookUp", alias = "stocks")]
        stocks: Vec<WatchListEntry>,
    },
}

impl WatchlistConfig {
    /// Resolve `file` against `base_dir` when it is relative.
    #[must_use]
    pub fn file_path(&self, base_dir: Option<&Path>) -> Option<PathBuf> {
        let file = self.file.as_ref()?;
        match base_dir {
            Some(dir) if file.is_relative() => Some(dir.join(file)),
            _ => Some(file.clone()),
        }
    }

    /// Append the lookup file's entries after the inline ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Watchlist`] if the file cannot be read or is
    /// not a JSON list of entries.
    pub fn load_file(&mut self, base_dir: Option<&Path>) -> Result<usize, ConfigError> {
        let Some(path) = self.file_path(base_dir) else {
            return Ok(0);
        };
        let entries = read_lookup_file(&path)?;
        let count = entries.len();
        self.entries.extend(entries);
        Ok(count)
    }
}

/// Parse a JSON stock lookup file.
///
/// # Errors
///
/// Returns [`ConfigError::Watchlist`] on I/O or decode failure.
pub fn read_lookup_file(path: &Path) -> Result<Vec<WatchListEntry>, ConfigError> {
    let watchlist_error = |reason: String| ConfigError::Watchlist {
        path: path.display().to_string(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| watchlist_error(e.to_string()))?;
    parse_lookup(&content).map_err(|e| watchlist_error(e.to_string()))
}

fn parse_lookup(content: &str) -> serde_json::Result<Vec<WatchListEntry>> {
    Ok(match serde_json::from_str(content)? {
        LookupFile::List(entries) | LookupFile::Wrapped { stocks: entries } => entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_list() {
        let entries = parse_lookup(
            r#"[{"code": "INFY", "bseCode": "500209", "name": "Infosys", "marketCap": 600000}]"#,
        )
        .expect("valid list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].bse_code.as_deref(), Some("500209"));
        assert_eq!(entries[0].market_cap, dec!(600000));
    }

    #[test]
    fn parses_wrapped_lookup() {
        let entries = parse_lookup(
            r#"{"StockLookUp": [{"stockCode": "TCS", "marketCap": "1200000.5"}]}"#,
        )
        .expect("valid wrapped list");
        assert_eq!(entries[0].code, "TCS");
        assert_eq!(entries[0].market_cap, dec!(1200000.5));
    }

    #[test]
    fn rejects_non_list_payload() {
        assert!(parse_lookup(r#"{"code": "INFY"}"#).is_err());
    }

    #[test]
    fn relative_file_resolves_against_base_dir() {
        let config = WatchlistConfig {
            file: Some(PathBuf::from("stocks.json")),
            ..WatchlistConfig::default()
        };
        assert_eq!(
            config.file_path(Some(Path::new("/etc/corpwatch"))),
            Some(PathBuf::from("/etc/corpwatch/stocks.json"))
        );
        assert_eq!(config.file_path(None), Some(PathBuf::from("stocks.json")));
    }

    #[test]
    fn missing_file_is_a_watchlist_error() {
        let mut config = WatchlistConfig {
            file: Some(PathBuf::from("/definitely/not/here.json")),
            ..WatchlistConfig::default()
        };
        let err = config.load_file(None).expect_err("missing file");
        assert!(matches!(err, ConfigError::Watchlist { .. }));
    }
}
