//! Color palette for the phosphor CRT theme.

use ratatui::style::Color;

// --- Background ---
pub const SCREEN_BG: Color = Color::Black; // The tube itself

// --- Phosphor accent ---
pub const ACCENT: Color = Color::Yellow; // Amber phosphor
pub const ACCENT_BRIGHT: Color = Color::LightYellow; // Emphasis / high contrast

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_BRIGHT: Color = Color::White;
pub const TEXT_DIM: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Yellow;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Link online
pub const STATUS_RED: Color = Color::Red; // Fault
pub const STATUS_YELLOW: Color = Color::Yellow; // Syncing

// --- System log ---
pub const LOG_TEXT: Color = Color::Yellow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        let _: Color = ACCENT;
        let _: Color = SCREEN_BG;
        let _: Color = STATUS_GREEN;
        let _: Color = LOG_TEXT;
    }
}
