//! Scripted announcement feed.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Announcement, Source};
use crate::error::FetchError;
use crate::port::AnnouncementFeed;

type Scripted = Result<Vec<Announcement>, FetchError>;

/// Deterministic test double for an exchange feed.
///
/// Returns scripted results in order; once the script runs out it keeps
/// returning the fallback snapshot. Clones share the script.
#[derive(Clone)]
pub struct ScriptedFeed {
    source: Source,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    fallback: Arc<Vec<Announcement>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedFeed {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Arc::new(Vec::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A feed that always returns `snapshot`.
    pub fn repeating(source: Source, snapshot: Vec<Announcement>) -> Self {
        Self {
            fallback: Arc::new(snapshot),
            ..Self::new(source)
        }
    }

    pub fn push_snapshot(&self, snapshot: Vec<Announcement>) {
        self.script
            .lock()
            .expect("lock feed script")
            .push_back(Ok(snapshot));
    }

    /// Queue a decode failure for the next fetch.
    pub fn push_failure(&self, reason: &str) {
        self.script
            .lock()
            .expect("lock feed script")
            .push_back(Err(FetchError::Decode {
                source_name: self.source,
                reason: reason.to_string(),
            }));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnnouncementFeed for ScriptedFeed {
    async fn fetch(&self) -> Result<Vec<Announcement>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().expect("lock feed script").pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.as_ref().clone()))
    }

    fn source(&self) -> Source {
        self.source
    }
}
