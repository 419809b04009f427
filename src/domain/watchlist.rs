//! Static watch list of tracked instruments.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Market capitalisation an instrument must exceed to be tracked.
pub const DEFAULT_MIN_MARKET_CAP: Decimal = dec!(1000);

/// One tracked instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchListEntry {
    /// Primary instrument code (NSE symbol).
    #[serde(alias = "stockCode", alias = "stock_code")]
    pub code: String,
    /// BSE scrip code for the same instrument.
    #[serde(default, alias = "bse_code", alias = "scripCode", alias = "scrip_code")]
    pub bse_code: Option<String>,
    #[serde(default, alias = "stockName", alias = "stock_name")]
    pub name: Option<String>,
    /// Market capitalisation, in the watch list's own unit.
    #[serde(alias = "market_cap")]
    pub market_cap: Decimal,
}

impl WatchListEntry {
    pub fn new(code: impl Into<String>, market_cap: Decimal) -> Self {
        Self {
            code: code.into(),
            bse_code: None,
            name: None,
            market_cap,
        }
    }

    #[must_use]
    pub fn with_bse_code(mut self, bse_code: impl Into<String>) -> Self {
        self.bse_code = Some(bse_code.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Immutable watch list, indexed by primary code and BSE alias.
///
/// Lookups are case-insensitive and ignore surrounding whitespace.
#[derive(Debug, Clone)]
pub struct WatchList {
    entries: Vec<WatchListEntry>,
    index: HashMap<String, usize>,
    min_market_cap: Decimal,
}

impl WatchList {
    /// Build a watch list. Later entries never shadow earlier codes.
    #[must_use]
    pub fn new(entries: Vec<WatchListEntry>, min_market_cap: Decimal) -> Self {
        let mut index = HashMap::with_capacity(entries.len() * 2);
        for (i, entry) in entries.iter().enumerate() {
            index.entry(normalize(&entry.code)).or_insert(i);
            if let Some(alias) = entry.bse_code.as_deref() {
                index.entry(normalize(alias)).or_insert(i);
            }
        }
        Self {
            entries,
            index,
            min_market_cap,
        }
    }

    /// Find the entry an instrument code refers to, regardless of threshold.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<&WatchListEntry> {
        self.index.get(&normalize(code)).map(|&i| &self.entries[i])
    }

    /// True when `code` resolves to an entry strictly above the threshold.
    #[must_use]
    pub fn tracks(&self, code: &str) -> bool {
        self.resolve(code)
            .is_some_and(|entry| entry.market_cap > self.min_market_cap)
    }

    /// Entries that pass the market cap threshold, in load order.
    pub fn tracked(&self) -> impl Iterator<Item = &WatchListEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.market_cap > self.min_market_cap)
    }

    pub fn min_market_cap(&self) -> Decimal {
        self.min_market_cap
    }

    pub fn entries(&self) -> &[WatchListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
