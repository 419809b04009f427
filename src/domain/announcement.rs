//! Corporate announcement records as reported by an exchange.
//!
//! An [`Announcement`] is built fresh from every fetch and never mutated
//! afterwards. Construction goes through [`AnnouncementBuilder`], which
//! enforces the fields the novelty key depends on.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use thiserror::Error;

use super::key::AnnouncementKey;
use super::source::Source;

/// Error returned when building an [`Announcement`] fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnouncementBuildError {
    #[error("source is required")]
    MissingSource,
    #[error("instrument_code is required")]
    MissingInstrumentCode,
    #[error("subject is required")]
    MissingSubject,
    #[error("source_time is required")]
    MissingSourceTime,
}

/// One disclosure event published by an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    source: Source,
    instrument_code: String,
    secondary_code: String,
    instrument_name: String,
    category: String,
    subcategory: Option<String>,
    subject: String,
    document_url: String,
    source_time: DateTime<FixedOffset>,
    disseminated_at: DateTime<FixedOffset>,
}

impl Announcement {
    /// Create a builder for an announcement.
    #[must_use]
    pub fn builder() -> AnnouncementBuilder {
        AnnouncementBuilder::new()
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Exchange-local instrument code (NSE symbol or BSE scrip code).
    pub fn instrument_code(&self) -> &str {
        &self.instrument_code
    }

    /// Cross-reference code (ISIN on NSE, news id on BSE).
    pub fn secondary_code(&self) -> &str {
        &self.secondary_code
    }

    pub fn instrument_name(&self) -> &str {
        &self.instrument_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn document_url(&self) -> &str {
        &self.document_url
    }

    /// When the exchange recorded the announcement.
    pub fn source_time(&self) -> DateTime<FixedOffset> {
        self.source_time
    }

    /// When the exchange made the announcement public.
    pub fn disseminated_at(&self) -> DateTime<FixedOffset> {
        self.disseminated_at
    }

    /// Identity key used for novelty tracking.
    #[must_use]
    pub fn key(&self) -> AnnouncementKey {
        AnnouncementKey::from(self)
    }

    /// `category - subcategory`, or just the category when there is none.
    #[must_use]
    pub fn kind_label(&self) -> String {
        match self.subcategory() {
            Some(sub) if !sub.is_empty() => format!("{} - {}", self.category, sub),
            _ => self.category.clone(),
        }
    }
}

/// Builder for constructing [`Announcement`] instances.
///
/// `source`, `instrument_code`, `subject` and `source_time` are required.
/// `disseminated_at` defaults to `source_time` when unset.
#[derive(Debug, Default)]
pub struct AnnouncementBuilder {
    source: Option<Source>,
    instrument_code: Option<String>,
    secondary_code: String,
    instrument_name: String,
    category: String,
    subcategory: Option<String>,
    subject: Option<String>,
    document_url: String,
    source_time: Option<DateTime<FixedOffset>>,
    disseminated_at: Option<DateTime<FixedOffset>>,
}

impl AnnouncementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn instrument_code(mut self, code: impl Into<String>) -> Self {
        self.instrument_code = Some(code.into());
        self
    }

    pub fn secondary_code(mut self, code: impl Into<String>) -> Self {
        self.secondary_code = code.into();
        self
    }

    pub fn instrument_name(mut self, name: impl Into<String>) -> Self {
        self.instrument_name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the subcategory. Blank values are stored as `None`.
    pub fn subcategory(mut self, subcategory: Option<String>) -> Self {
        self.subcategory = subcategory.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn document_url(mut self, url: impl Into<String>) -> Self {
        self.document_url = url.into();
        self
    }

    pub fn source_time(mut self, at: DateTime<FixedOffset>) -> Self {
        self.source_time = Some(at);
        self
    }

    pub fn disseminated_at(mut self, at: DateTime<FixedOffset>) -> Self {
        self.disseminated_at = Some(at);
        self
    }

    pub fn build(self) -> Result<Announcement, AnnouncementBuildError> {
        let source = self.source.ok_or(AnnouncementBuildError::MissingSource)?;
        let instrument_code = self
            .instrument_code
            .filter(|c| !c.trim().is_empty())
            .ok_or(AnnouncementBuildError::MissingInstrumentCode)?;
        let subject = self
            .subject
            .filter(|s| !s.trim().is_empty())
            .ok_or(AnnouncementBuildError::MissingSubject)?;
        let source_time = self
            .source_time
            .ok_or(AnnouncementBuildError::MissingSourceTime)?;

        Ok(Announcement {
            source,
            instrument_code,
            secondary_code: self.secondary_code,
            instrument_name: self.instrument_name,
            category: self.category,
            subcategory: self.subcategory,
            subject,
            document_url: self.document_url,
            source_time,
            disseminated_at: self.disseminated_at.unwrap_or(source_time),
        })
    }
}
