//! Style helpers shared across widgets

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use rpanel_core::ConnectionStatus;

use super::palette;

/// Bordered panel in the CRT look. Accented panels get the phosphor
/// border, everything else the dim one.
pub fn retro_block(accented: bool) -> Block<'static> {
    let border = if accented {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(border))
}

/// Title text of a panel section.
pub fn section_title() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Body text, honoring the high-contrast setting.
pub fn body_text(high_contrast: bool) -> Style {
    let fg = if high_contrast {
        palette::TEXT_BRIGHT
    } else {
        palette::TEXT_PRIMARY
    };
    Style::default().fg(fg)
}

/// Muted labels and hints.
pub fn dim_text() -> Style {
    Style::default().fg(palette::TEXT_DIM)
}

/// Indicator icon and style for the LINK tile.
pub fn link_indicator(status: &ConnectionStatus) -> (&'static str, Style) {
    match status {
        ConnectionStatus::Connected => ("●", Style::default().fg(palette::STATUS_GREEN)),
        ConnectionStatus::Connecting => ("◌", Style::default().fg(palette::STATUS_YELLOW)),
        ConnectionStatus::Error => ("✖", Style::default().fg(palette::STATUS_RED)),
    }
}

/// Value style for the POWER tile.
pub fn power_value(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_DIM)
    }
}
