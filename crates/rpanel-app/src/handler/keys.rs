//! Key event handling

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Map a key press to a panel message.
///
/// Quit works from any screen; everything else requires the console to be
/// interactive, so stray presses during the boot sequence are dropped.
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if !state.phase.is_interactive() {
        return match key {
            InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
            _ => None,
        };
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('a') | InputKey::Char(' ') => Some(Message::TogglePower),
        InputKey::Char('p') => Some(Message::Ping),
        InputKey::Char('s') => Some(Message::SyncLink),
        InputKey::Char('g') | InputKey::Enter => Some(Message::LaunchEmbed),
        InputKey::Char('m') => Some(Message::ToggleMinimize),
        InputKey::Char('x') => Some(Message::CloseEmbed),
        InputKey::Char('o') => Some(Message::OpenExternal),
        _ => None,
    }
}
