//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Render tick from the event-poll timeout; drives no state
    Tick,

    /// Force quit (q/Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Boot Sequence
    // ─────────────────────────────────────────────────────────
    /// Repeating boot timer fired; advance the boot sequence
    BootTick,

    // ─────────────────────────────────────────────────────────
    // Panel Controls
    // ─────────────────────────────────────────────────────────
    /// Flip the power toggle between active and standby
    TogglePower,
    /// Log a localhost ping and schedule its response
    Ping,
    /// Delayed ping response arrived
    PingResponse,
    /// Force a game-link re-sync
    SyncLink,
    /// Delayed sync completion arrived
    SyncCompleted,

    // ─────────────────────────────────────────────────────────
    // Embedded Game Terminal
    // ─────────────────────────────────────────────────────────
    /// Toggle the embedded surface between closed and open
    LaunchEmbed,
    /// Flip the minimized flag of an active surface
    ToggleMinimize,
    /// Force the embedded surface closed
    CloseEmbed,
    /// Ask the host to open the embed origin externally
    OpenExternal,
}
