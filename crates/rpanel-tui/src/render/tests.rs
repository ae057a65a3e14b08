//! Full-frame render tests

use rpanel_app::config::{BootSettings, Settings};
use rpanel_app::{update, AppState, Message};
use rpanel_core::AppPhase;

use crate::test_utils::TestTerminal;
use crate::widgets::APP_NAME;

use super::view;

fn active_state() -> AppState {
    let settings = Settings {
        boot: BootSettings {
            interval_ms: 600,
            messages: Some(vec![]),
        },
        ..Default::default()
    };
    let mut state = AppState::with_settings(settings);
    update(&mut state, Message::BootTick);
    assert_eq!(state.phase, AppPhase::Active);
    state
}

#[test]
fn test_loading_screen_shows_boot_text() {
    let state = AppState::new();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains(APP_NAME));
    assert!(term.buffer_contains(&state.boot_text));
    // Console chrome is absent while loading
    assert!(!term.buffer_contains("SYSTEM LOG"));
}

#[test]
fn test_active_screen_shows_console_chrome() {
    let state = active_state();
    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains(APP_NAME));
    assert!(term.buffer_contains("POWER"));
    assert!(term.buffer_contains("MEMORY"));
    assert!(term.buffer_contains("LINK"));
    assert!(term.buffer_contains("SYSTEM LOG"));
    assert!(term.buffer_contains("SECURE CONNECTION ESTABLISHED"));
    // Embed closed: control deck visible
    assert!(term.buffer_contains("LAUNCH GAME TERMINAL"));
}

#[test]
fn test_active_screen_shows_boot_log_lines() {
    let state = active_state();
    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("SYSTEM READY."));
}

#[test]
fn test_open_embed_replaces_control_deck() {
    let mut state = active_state();
    update(&mut state, Message::LaunchEmbed);

    let mut term = TestTerminal::with_size(100, 32);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("GAME TERMINAL"));
    assert!(!term.buffer_contains("LAUNCH GAME TERMINAL"));
}

#[test]
fn test_minimized_embed_shows_chip_only() {
    let mut state = active_state();
    update(&mut state, Message::LaunchEmbed);
    update(&mut state, Message::ToggleMinimize);

    let mut term = TestTerminal::with_size(100, 32);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("MINIMIZED"));
    assert!(!term.buffer_contains("REMOTE SESSION"));
    assert!(!term.buffer_contains("LAUNCH GAME TERMINAL"));
}

#[test]
fn test_power_toggle_reflected_in_tiles() {
    let mut state = active_state();
    update(&mut state, Message::TogglePower);

    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("PROTOCOL: ENABLED"));
}
