//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal lifecycle, the message channel, and the scheduler.
//! Teardown cancels every pending timer before the terminal is restored,
//! so no callback can reach a state container that no longer exists.

use tokio::sync::mpsc;

use rpanel_app::config::Settings;
use rpanel_app::{process_message, signals, AppState, Message, Scheduler};
use rpanel_core::prelude::*;

use crate::{event, render};

/// Run the panel until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    // Unified message channel: timers, signals, and key events all land here
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Send Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let mut scheduler = Scheduler::new(msg_tx);
    scheduler.start_boot_timer(state.boot_interval());

    let result = run_loop(&mut term, &mut state, &mut msg_rx, &mut scheduler);

    scheduler.cancel_all();
    ratatui::restore();
    result
}

/// Install a panic hook that restores the terminal
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    scheduler: &mut Scheduler,
) -> Result<()> {
    while !state.should_quit() {
        // Drain timer and signal messages (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, scheduler);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, scheduler);
        }
    }

    info!("Quit requested, shutting down");
    Ok(())
}
