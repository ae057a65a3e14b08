//! OS signal handling
//!
//! SIGINT/SIGTERM (Ctrl+C on Windows) become a [`Message::Quit`] on the
//! main channel, so the event loop tears down the same way it does for a
//! `q` key press: timers cancelled, terminal restored.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use rpanel_core::prelude::*;

use crate::message::Message;

/// Listen for termination signals and translate the first one into
/// [`Message::Quit`]. The task ends after sending.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let (mut sigint, mut sigterm) = match (
                signal(SignalKind::interrupt()),
                signal(SignalKind::terminate()),
            ) {
                (Ok(int), Ok(term)) => (int, term),
                (int, term) => {
                    error!(
                        "Could not install signal handlers: {:?} / {:?}",
                        int.err(),
                        term.err()
                    );
                    return;
                }
            };

            tokio::select! {
                _ = sigint.recv() => info!("SIGINT received"),
                _ = sigterm.recv() => info!("SIGTERM received"),
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Could not listen for Ctrl+C: {e}");
                return;
            }
            info!("Ctrl+C received");
        }

        let _ = tx.send(Message::Quit).await;
    })
}
