use thiserror::Error;

use crate::domain::Source;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to load watch list from {path}: {reason}")]
    Watchlist { path: String, reason: String },
}

/// Errors raised while fetching a snapshot from one exchange.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{source_name} request failed: {error}")]
    Http {
        source_name: Source,
        #[source]
        error: reqwest::Error,
    },

    #[error("{source_name} returned HTTP {status}")]
    Status {
        source_name: Source,
        status: reqwest::StatusCode,
    },

    #[error("{source_name} payload could not be decoded: {reason}")]
    Decode { source_name: Source, reason: String },

    #[error("{source_name} timestamp '{value}' is not recognised")]
    Timestamp { source_name: Source, value: String },
}

impl FetchError {
    /// The exchange the failed fetch was addressed to.
    #[must_use]
    pub fn source_name(&self) -> Source {
        match self {
            Self::Http { source_name, .. }
            | Self::Status { source_name, .. }
            | Self::Decode { source_name, .. }
            | Self::Timestamp { source_name, .. } => *source_name,
        }
    }
}

/// Notification delivery failures.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("{sink} backend failed: {reason}")]
    Backend { sink: &'static str, reason: String },

    #[error("{sink} backend is unavailable: {reason}")]
    Unavailable { sink: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
