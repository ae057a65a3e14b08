//! Application state (Model in TEA pattern)

use std::time::Duration;

use rpanel_core::{AppPhase, ConnectionStatus, EmbedState, LogTrail};

use crate::boot::{BootState, DEFAULT_BOOT_MESSAGES};
use crate::config::Settings;

/// The single source of truth consumed by the rendering layer.
///
/// Owns the boot sequence, power toggle, simulated game link, embedded
/// surface state, and the bounded system log. All mutation happens through
/// [`crate::handler::update`] on one event loop.
#[derive(Debug)]
pub struct AppState {
    /// Top-level lifecycle phase; governs which screen is rendered
    pub phase: AppPhase,

    /// Boot progression. Released the instant the sequence completes.
    pub boot: Option<BootState>,

    /// Boot line currently on screen
    pub boot_text: String,

    /// Power toggle (active vs standby)
    pub power_active: bool,

    /// Simulated game-link status
    pub link: ConnectionStatus,

    /// Embedded game-terminal state
    pub embed: EmbedState,

    /// Bounded newest-first system log
    pub log: LogTrail,

    pub settings: Settings,

    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let messages = settings.boot.messages.clone().unwrap_or_else(|| {
            DEFAULT_BOOT_MESSAGES
                .iter()
                .map(|m| m.to_string())
                .collect()
        });
        let boot = BootState::new(messages);
        let boot_text = boot.initial_message().unwrap_or_default().to_string();

        Self {
            phase: AppPhase::Loading,
            boot: Some(boot),
            boot_text,
            power_active: false,
            link: ConnectionStatus::Connecting,
            embed: EmbedState::default(),
            log: LogTrail::new(),
            settings,
            should_quit: false,
        }
    }

    /// Append a timestamped line to the system log.
    pub fn append_log(&mut self, message: impl Into<String>) {
        self.log.append(message);
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn boot_interval(&self) -> Duration {
        Duration::from_millis(self.settings.boot.interval_ms)
    }

    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.settings.link.sync_delay_ms)
    }

    pub fn ping_delay(&self) -> Duration {
        Duration::from_millis(self.settings.link.ping_delay_ms)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BootSettings, Settings};

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Loading);
        assert_eq!(state.link, ConnectionStatus::Connecting);
        assert!(!state.power_active);
        assert_eq!(state.embed, EmbedState::default());
        assert!(state.log.is_empty());
        assert!(!state.should_quit());
        assert_eq!(state.boot_text, DEFAULT_BOOT_MESSAGES[0]);
    }

    #[test]
    fn test_boot_messages_from_settings() {
        let settings = Settings {
            boot: BootSettings {
                interval_ms: 100,
                messages: Some(vec!["HELLO".to_string()]),
            },
            ..Default::default()
        };
        let state = AppState::with_settings(settings);

        assert_eq!(state.boot_text, "HELLO");
        assert_eq!(state.boot_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_request_quit() {
        let mut state = AppState::new();
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_delay_accessors() {
        let state = AppState::new();
        assert_eq!(state.sync_delay(), Duration::from_millis(1000));
        assert_eq!(state.ping_delay(), Duration::from_millis(400));
        assert_eq!(state.boot_interval(), Duration::from_millis(600));
    }
}
