//! Process-level runtime: run the poll loop until Ctrl+C.

use tokio::signal;
use tokio::sync::watch;
use tracing::info;

use crate::application::{PollLoop, PollStats};
use crate::error::{Error, Result};

/// Run `poll` in a task and stop it cleanly on Ctrl+C.
///
/// # Errors
///
/// Returns an error if the loop task panics.
pub async fn run_until_ctrl_c(poll: PollLoop) -> Result<PollStats> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut handle = tokio::spawn(poll.run(shutdown_rx));

    tokio::select! {
        result = &mut handle => {
            return result.map_err(join_error);
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received (Ctrl+C)");
            let _ = shutdown_tx.send(true);
        }
    }

    handle.await.map_err(join_error)
}

fn join_error(err: tokio::task::JoinError) -> Error {
    Error::Io(std::io::Error::other(format!("poll loop task failed: {err}")))
}
