//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

use rpanel_core::LOG_CAPACITY;

/// Screen areas for the active console layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (app name, version badge, key hints)
    pub header: Rect,

    /// Status tile row (POWER / MEMORY / LINK)
    pub status: Rect,

    /// Embed viewport or control deck
    pub body: Rect,

    /// System log panel
    pub log: Rect,

    /// Footer line
    pub footer: Rect,
}

/// Create the active console layout.
///
/// The log panel is sized to show the full trail (capacity + borders);
/// the body takes whatever remains.
pub fn create(area: Rect) -> ScreenAreas {
    let log_height = LOG_CAPACITY as u16 + 2;
    let constraints = [
        Constraint::Length(3),          // Header
        Constraint::Length(5),          // Status tiles
        Constraint::Min(6),             // Body (embed viewport or controls)
        Constraint::Length(log_height), // System log
        Constraint::Length(1),          // Footer
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        status: chunks[1],
        body: chunks[2],
        log: chunks[3],
        footer: chunks[4],
    }
}
