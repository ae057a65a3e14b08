//! Main update function - handles state transitions (TEA pattern)

use rpanel_core::{AppPhase, ConnectionStatus};

use crate::boot::BootStep;
use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Render tick only; no state to advance here
        Message::Tick => UpdateResult::none(),

        Message::BootTick => handle_boot_tick(state),

        // ─────────────────────────────────────────────────────────
        // Panel Controls
        // ─────────────────────────────────────────────────────────
        Message::TogglePower => {
            state.power_active = !state.power_active;
            let line = if state.power_active {
                "PROTOCOL: ENABLED"
            } else {
                "PROTOCOL: DISABLED"
            };
            state.append_log(line);
            UpdateResult::none()
        }

        Message::Ping => {
            state.append_log("PINGING LOCALHOST...");
            UpdateResult::action(UpdateAction::ScheduleOnce {
                delay: state.ping_delay(),
                message: Message::PingResponse,
            })
        }

        Message::PingResponse => {
            state.append_log("RESPONSE: 2ms");
            UpdateResult::none()
        }

        Message::SyncLink => {
            // Observable immediately; completion arrives on its own timer.
            state.link = ConnectionStatus::Connecting;
            UpdateResult::action(UpdateAction::ScheduleOnce {
                delay: state.sync_delay(),
                message: Message::SyncCompleted,
            })
        }

        Message::SyncCompleted => {
            state.link = ConnectionStatus::Connected;
            state.append_log("GAME STATE SYNCHRONIZED");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Embedded Game Terminal
        // ─────────────────────────────────────────────────────────
        Message::LaunchEmbed => {
            if state.embed.launch() {
                state.append_log("LAUNCHING GAME TERMINAL...");
            } else {
                state.append_log("MINIMIZING...");
            }
            UpdateResult::none()
        }

        Message::ToggleMinimize => {
            let minimized = state.embed.minimized;
            state.embed.set_minimized(!minimized);
            UpdateResult::none()
        }

        Message::CloseEmbed => {
            state.embed.close();
            UpdateResult::none()
        }

        Message::OpenExternal => {
            state.append_log("OPENING EXTERNAL CONSOLE...");
            UpdateResult::action(UpdateAction::OpenExternal {
                url: state.settings.embed.url.clone(),
            })
        }
    }
}

/// Advance the boot sequence by one timer tick.
///
/// On completion the sequencer is released, the console activates, the
/// game link comes up, and the two fixed ready lines are logged. The
/// returned action stops the repeating timer so the sequence can never
/// re-fire.
fn handle_boot_tick(state: &mut AppState) -> UpdateResult {
    let Some(boot) = state.boot.as_mut() else {
        return UpdateResult::none();
    };

    match boot.advance() {
        BootStep::Message(text) => {
            state.boot_text = text;
            UpdateResult::none()
        }
        BootStep::Completed => {
            state.boot = None;
            state.phase = AppPhase::Active;
            state.link = ConnectionStatus::Connected;
            state.append_log("SYSTEM READY.");
            state.append_log("SECURE CONNECTION ESTABLISHED");
            UpdateResult::action(UpdateAction::CancelBootTimer)
        }
        BootStep::Halted => UpdateResult::none(),
    }
}
