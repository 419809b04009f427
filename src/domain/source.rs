//! Exchange identity and per-run source selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Exchange an announcement was published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// National Stock Exchange of India.
    Nse,
    /// BSE (Bombay Stock Exchange).
    Bse,
}

impl Source {
    /// Upper-case exchange label, e.g. `NSE`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
        }
    }

    /// Two-letter tag used in compact notification titles.
    #[must_use]
    pub const fn short_tag(self) -> &'static str {
        match self {
            Self::Nse => "NS",
            Self::Bse => "BS",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which exchanges a run queries. Chosen once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSelector {
    #[default]
    Nse,
    Bse,
    Both,
}

impl SourceSelector {
    /// Exchanges covered by this selector, in merge precedence order.
    #[must_use]
    pub const fn sources(self) -> &'static [Source] {
        match self {
            Self::Nse => &[Source::Nse],
            Self::Bse => &[Source::Bse],
            Self::Both => &[Source::Nse, Source::Bse],
        }
    }

    #[must_use]
    pub fn includes(self, source: Source) -> bool {
        self.sources().contains(&source)
    }
}

impl fmt::Display for SourceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nse => f.write_str("NSE"),
            Self::Bse => f.write_str("BSE"),
            Self::Both => f.write_str("NSE+BSE"),
        }
    }
}

impl FromStr for SourceSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nse" | "1" => Ok(Self::Nse),
            "bse" | "2" => Ok(Self::Bse),
            "both" | "all" => Ok(Self::Both),
            other => Err(format!("unknown source '{other}', expected nse, bse or both")),
        }
    }
}
