//! Core domain type definitions

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Top-level application lifecycle phase
///
/// Starts at `Loading` and moves to `Active` exactly once, when the boot
/// sequence finishes. `Idle` and `Error` are not produced by the simulated
/// flows; they exist so a future real-I/O integration has somewhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Boot sequence is running
    #[default]
    Loading,
    /// Main console is interactive
    Active,
    /// Reserved for future use
    Idle,
    /// Reserved for future use
    Error,
}

impl AppPhase {
    /// True once the main console accepts panel actions.
    pub fn is_interactive(&self) -> bool {
        matches!(self, AppPhase::Active)
    }
}

/// Simulated game-link status shown in the LINK tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Handshake in progress (initial state, and during a manual sync)
    #[default]
    Connecting,
    /// Link established
    Connected,
    /// Reserved for future use
    Error,
}

impl ConnectionStatus {
    /// Short uppercase label for the LINK tile.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "SYNCING",
            ConnectionStatus::Connected => "ONLINE",
            ConnectionStatus::Error => "FAULT",
        }
    }

    /// Returns `true` while the link is anything other than `Connected`.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, ConnectionStatus::Connected)
    }
}

/// A single system-log line with its wall-clock timestamp.
///
/// Entries are immutable once created; only [`LogTrail`] produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    /// Create a new entry stamped with the current local time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
        }
    }

    /// Zero-padded 24-hour local time, `HH:MM:SS`.
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Single-line display form: `[HH:MM:SS] MESSAGE`.
    pub fn display_line(&self) -> String {
        format!("[{}] {}", self.formatted_time(), self.message)
    }
}

/// Maximum number of entries a [`LogTrail`] retains.
pub const LOG_CAPACITY: usize = 8;

/// Bounded, newest-first record of system-log entries.
///
/// Appending at capacity evicts the oldest entry. Order reflects insertion
/// order, which is monotonic in time.
#[derive(Debug, Clone, Default)]
pub struct LogTrail {
    entries: VecDeque<LogEntry>,
}

impl LogTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `message` with the current local time and prepend it,
    /// truncating to [`LOG_CAPACITY`]. Always succeeds.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push_front(LogEntry::new(message));
        self.entries.truncate(LOG_CAPACITY);
    }

    /// Entries, newest first. Read-only.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recently appended entry, if any.
    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Open/minimized state of the embedded game terminal.
///
/// `minimized` is only meaningful while `active` is true; every path that
/// clears `active` clears `minimized` with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmbedState {
    pub active: bool,
    pub minimized: bool,
}

impl EmbedState {
    /// Toggle between closed and open.
    ///
    /// The panel's single button doubles as launch and close: pressing it
    /// while the surface is already active closes it rather than
    /// re-opening. Returns `true` when the surface is active afterwards.
    pub fn launch(&mut self) -> bool {
        if self.active {
            *self = Self::default();
        } else {
            self.active = true;
            self.minimized = false;
        }
        self.active
    }

    /// Set the minimized flag. No-op while the surface is closed, since
    /// `minimized` has no meaning then.
    pub fn set_minimized(&mut self, minimized: bool) {
        if self.active {
            self.minimized = minimized;
        }
    }

    /// Force the surface closed from any state. Idempotent.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// True when the surface should occupy its full viewport.
    pub fn is_open(&self) -> bool {
        self.active && !self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_starts_loading() {
        assert_eq!(AppPhase::default(), AppPhase::Loading);
        assert!(!AppPhase::Loading.is_interactive());
        assert!(AppPhase::Active.is_interactive());
    }

    #[test]
    fn test_connection_status_labels() {
        assert_eq!(ConnectionStatus::Connecting.label(), "SYNCING");
        assert_eq!(ConnectionStatus::Connected.label(), "ONLINE");
        assert_eq!(ConnectionStatus::Error.label(), "FAULT");
    }

    #[test]
    fn test_connection_status_degraded() {
        assert!(ConnectionStatus::Connecting.is_degraded());
        assert!(ConnectionStatus::Error.is_degraded());
        assert!(!ConnectionStatus::Connected.is_degraded());
    }

    #[test]
    fn test_log_entry_formatted_time() {
        let entry = LogEntry::new("Test");
        let time = entry.formatted_time();
        // HH:MM:SS
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
    }

    #[test]
    fn test_log_entry_display_line() {
        let entry = LogEntry::new("SYSTEM READY.");
        let line = entry.display_line();
        assert!(line.starts_with('['));
        assert!(line.ends_with("] SYSTEM READY."));
    }

    #[test]
    fn test_log_trail_newest_first() {
        let mut trail = LogTrail::new();
        trail.append("first");
        trail.append("second");
        trail.append("third");

        let messages: Vec<&str> = trail.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
        assert_eq!(trail.newest().unwrap().message, "third");
    }

    #[test]
    fn test_log_trail_caps_at_capacity() {
        let mut trail = LogTrail::new();
        for i in 0..20 {
            trail.append(format!("entry {i}"));
        }

        assert_eq!(trail.len(), LOG_CAPACITY);
        // Oldest entries evicted first: 12..=19 remain, newest first.
        assert_eq!(trail.newest().unwrap().message, "entry 19");
        let oldest = trail.iter().last().unwrap();
        assert_eq!(oldest.message, "entry 12");
    }

    #[test]
    fn test_log_trail_length_is_min_of_appends_and_cap() {
        let mut trail = LogTrail::new();
        assert!(trail.is_empty());

        for k in 1..=12 {
            trail.append(format!("entry {k}"));
            assert_eq!(trail.len(), k.min(LOG_CAPACITY));
        }
    }

    #[test]
    fn test_embed_launch_from_closed() {
        let mut embed = EmbedState::default();
        assert!(embed.launch());
        assert_eq!(
            embed,
            EmbedState {
                active: true,
                minimized: false
            }
        );
    }

    #[test]
    fn test_embed_launch_twice_returns_to_closed() {
        let mut embed = EmbedState::default();
        embed.launch();
        assert!(!embed.launch());
        assert_eq!(embed, EmbedState::default());
    }

    #[test]
    fn test_embed_launch_while_minimized_closes() {
        let mut embed = EmbedState::default();
        embed.launch();
        embed.set_minimized(true);

        // The toggle button closes even a minimized surface.
        assert!(!embed.launch());
        assert_eq!(embed, EmbedState::default());
    }

    #[test]
    fn test_embed_minimize_round_trip() {
        let mut embed = EmbedState::default();
        embed.launch();

        embed.set_minimized(true);
        assert_eq!(
            embed,
            EmbedState {
                active: true,
                minimized: true
            }
        );
        assert!(!embed.is_open());

        embed.set_minimized(false);
        assert_eq!(
            embed,
            EmbedState {
                active: true,
                minimized: false
            }
        );
        assert!(embed.is_open());
    }

    #[test]
    fn test_embed_minimize_ignored_while_closed() {
        let mut embed = EmbedState::default();
        embed.set_minimized(true);
        assert_eq!(embed, EmbedState::default());
    }

    #[test]
    fn test_embed_close_from_any_state() {
        let mut closed = EmbedState::default();
        closed.close();
        assert_eq!(closed, EmbedState::default());

        let mut open = EmbedState::default();
        open.launch();
        open.close();
        assert_eq!(open, EmbedState::default());

        let mut minimized = EmbedState::default();
        minimized.launch();
        minimized.set_minimized(true);
        minimized.close();
        assert_eq!(minimized, EmbedState::default());
    }
}
