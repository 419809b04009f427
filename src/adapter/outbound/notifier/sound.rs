//! Audible alert via the terminal bell.

use std::io::Write as _;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Announcement;
use crate::error::SinkError;
use crate::port::AlertSink;

const BELL: &[u8] = b"\x07";
const RING_GAP: Duration = Duration::from_millis(400);

/// Rings the terminal bell once per batch, or `repeats` times when looping.
///
/// Muting is handled at wiring time: a muted config registers no sound sink.
pub struct SoundSink {
    rings: u32,
}

impl SoundSink {
    #[must_use]
    pub fn new(looped: bool, repeats: u32) -> Self {
        Self {
            rings: if looped { repeats.max(1) } else { 1 },
        }
    }

    /// Number of bells a batch produces.
    #[must_use]
    pub fn rings(&self) -> u32 {
        self.rings
    }
}

#[async_trait]
impl AlertSink for SoundSink {
    async fn deliver(&self, _alerts: &[Announcement]) -> Result<(), SinkError> {
        for ring in 0..self.rings() {
            if ring > 0 {
                tokio::time::sleep(RING_GAP).await;
            }
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(BELL)
                .and_then(|()| stdout.flush())
                .map_err(|e| SinkError::Backend {
                    sink: "sound",
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sound"
    }
}
