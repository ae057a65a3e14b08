//! Action execution - side effects requested by the update function

use rpanel_core::prelude::*;

use crate::handler::UpdateAction;
use crate::scheduler::Scheduler;

/// Execute an [`UpdateAction`] against the event loop's scheduler.
pub fn handle_action(action: UpdateAction, scheduler: &mut Scheduler) {
    match action {
        UpdateAction::CancelBootTimer => scheduler.cancel_boot_timer(),

        UpdateAction::ScheduleOnce { delay, message } => {
            scheduler.schedule_once(delay, message);
        }

        UpdateAction::OpenExternal { url } => {
            // Fire-and-forget: the host owns success or failure, and
            // neither is reported back to the panel state.
            tokio::spawn(async move {
                if let Err(e) = open_url(&url) {
                    error!("Failed to open {url} externally: {e}");
                }
            });
        }
    }
}

/// Open `url` with the platform default opener.
fn open_url(url: &str) -> std::io::Result<()> {
    use std::process::Command;

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_schedule_action_delivers_message() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        let mut scheduler = Scheduler::new(tx);

        handle_action(
            UpdateAction::ScheduleOnce {
                delay: Duration::from_millis(400),
                message: Message::PingResponse,
            },
            &mut scheduler,
        );

        assert_eq!(rx.recv().await, Some(Message::PingResponse));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_boot_timer_action() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        let mut scheduler = Scheduler::new(tx);
        scheduler.start_boot_timer(Duration::from_millis(100));

        handle_action(UpdateAction::CancelBootTimer, &mut scheduler);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
