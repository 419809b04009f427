//! Desktop toast notifications.
//!
//! Toasts are shown through the platform's notification command
//! (`notify-send` on Linux, `osascript` on macOS). Only the most recent
//! alerts of a batch are shown to avoid flooding the desktop.

use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::Announcement;
use crate::error::SinkError;
use crate::port::AlertSink;

const APP_NAME: &str = "corpwatch";
const EXPIRE_MS: &str = "25000";

/// One desktop notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    /// Click target, set only for links on a `.com` host.
    pub url: Option<String>,
}

impl Toast {
    /// Build the toast for one announcement: title `NS:CODE`, body the subject.
    #[must_use]
    pub fn for_announcement(ann: &Announcement) -> Self {
        let url = Some(ann.document_url())
            .filter(|u| u.contains(".com"))
            .map(str::to_string);
        Self {
            title: format!("{}:{}", ann.source().short_tag(), ann.instrument_code()),
            body: ann.subject().to_string(),
            url,
        }
    }
}

/// Notification command used to display toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastBackend {
    NotifySend,
    Osascript,
}

impl ToastBackend {
    /// The backend for the platform this binary was built for.
    #[must_use]
    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(Self::Osascript)
        } else if cfg!(unix) {
            Some(Self::NotifySend)
        } else {
            None
        }
    }

    /// Program and arguments that display `toast`.
    #[must_use]
    pub fn command_line(self, toast: &Toast) -> (&'static str, Vec<String>) {
        let body = match &toast.url {
            Some(url) => format!("{}\n{}", toast.body, url),
            None => toast.body.clone(),
        };
        match self {
            Self::NotifySend => (
                "notify-send",
                vec![
                    format!("--app-name={APP_NAME}"),
                    format!("--expire-time={EXPIRE_MS}"),
                    toast.title.clone(),
                    body,
                ],
            ),
            Self::Osascript => (
                "osascript",
                vec![
                    "-e".to_string(),
                    format!(
                        "display notification \"{}\" with title \"{}\"",
                        escape_applescript(&body),
                        escape_applescript(&toast.title)
                    ),
                ],
            ),
        }
    }
}

fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Shows the last `limit` alerts of each batch as desktop toasts.
pub struct DesktopSink {
    backend: Option<ToastBackend>,
    limit: usize,
}

impl DesktopSink {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self::with_backend(ToastBackend::detect(), limit)
    }

    #[must_use]
    pub fn with_backend(backend: Option<ToastBackend>, limit: usize) -> Self {
        Self { backend, limit }
    }

    /// Toasts for the last `limit` alerts, oldest first.
    #[must_use]
    pub fn toasts(&self, alerts: &[Announcement]) -> Vec<Toast> {
        let skip = alerts.len().saturating_sub(self.limit);
        alerts[skip..].iter().map(Toast::for_announcement).collect()
    }
}

#[async_trait]
impl AlertSink for DesktopSink {
    async fn deliver(&self, alerts: &[Announcement]) -> Result<(), SinkError> {
        let backend = self.backend.ok_or(SinkError::Unavailable {
            sink: "desktop",
            reason: "no notification command for this platform".into(),
        })?;

        for toast in self.toasts(alerts) {
            let (program, args) = backend.command_line(&toast);
            let status = Command::new(program)
                .args(&args)
                .status()
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => SinkError::Unavailable {
                        sink: "desktop",
                        reason: format!("{program} is not installed"),
                    },
                    _ => SinkError::Backend {
                        sink: "desktop",
                        reason: e.to_string(),
                    },
                })?;
            if !status.success() {
                return Err(SinkError::Backend {
                    sink: "desktop",
                    reason: format!("{program} exited with {status}"),
                });
            }
            debug!(title = %toast.title, "Toast shown");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}
