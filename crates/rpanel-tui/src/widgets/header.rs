//! Title bar widget
//!
//! App name on the left, key hints in the middle when they fit, and a
//! version badge on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Displayed application name.
pub const APP_NAME: &str = "RETRO PANEL";

/// Title bar across the top of the active console.
pub struct PanelHeader<'a> {
    version: &'a str,
}

impl<'a> PanelHeader<'a> {
    pub fn new(version: &'a str) -> Self {
        Self { version }
    }
}

impl Widget for PanelHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::retro_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("▒", Style::default().fg(palette::ACCENT)),
            Span::raw(" "),
            Span::styled(
                APP_NAME,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let left_width = left_line.width() as u16;

        let hints = vec![
            ("a", "Power"),
            ("p", "Ping"),
            ("s", "Sync"),
            ("g", "Game"),
            ("o", "Ext"),
            ("q", "Quit"),
        ];
        let mut hint_spans = Vec::new();
        for (key, label) in hints {
            hint_spans.push(Span::styled("[", styles::dim_text()));
            hint_spans.push(Span::styled(key, Style::default().fg(palette::ACCENT)));
            hint_spans.push(Span::styled(format!("] {label}  "), styles::dim_text()));
        }
        let hint_line = Line::from(hint_spans);
        let hint_width = hint_line.width() as u16;

        let badge = Line::from(vec![
            Span::styled("v", styles::dim_text()),
            Span::styled(self.version, Style::default().fg(palette::TEXT_PRIMARY)),
            Span::raw(" "),
        ]);
        let badge_width = badge.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Centered hints only when everything fits
        if left_width + hint_width + badge_width + 4 <= inner.width {
            let hint_x = inner.x + left_width + 2;
            buf.set_line(hint_x, inner.y, &hint_line, hint_width);
        }

        if left_width + badge_width + 2 <= inner.width {
            let badge_x = inner.x + inner.width - badge_width;
            buf.set_line(badge_x, inner.y, &badge, badge_width);
        }
    }
}
