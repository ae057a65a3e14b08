//! Embedded game terminal panel
//!
//! The surface itself is remote content the terminal cannot host; this
//! panel is its stand-in: a fixed-size viewport frame showing the origin
//! while open, or a one-line chip while minimized.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Fixed viewport the open surface is always given.
pub const EMBED_VIEWPORT_WIDTH: u16 = 64;
pub const EMBED_VIEWPORT_HEIGHT: u16 = 12;

/// The embedded game terminal, open or minimized.
pub struct EmbedPanel<'a> {
    url: &'a str,
    minimized: bool,
}

impl<'a> EmbedPanel<'a> {
    pub fn new(url: &'a str) -> Self {
        Self {
            url,
            minimized: false,
        }
    }

    pub fn minimized(mut self, minimized: bool) -> Self {
        self.minimized = minimized;
        self
    }

    /// The fixed-size viewport rect, centered in `area` and clamped to it.
    pub fn viewport(area: Rect) -> Rect {
        let width = EMBED_VIEWPORT_WIDTH.min(area.width);
        let height = EMBED_VIEWPORT_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn render_open(self, area: Rect, buf: &mut Buffer) {
        let block = styles::retro_block(true)
            .title(Span::styled(" GAME TERMINAL ", styles::section_title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 {
            return;
        }

        let mut lines = vec![Line::from(""); (inner.height as usize).saturating_sub(4) / 2];
        lines.push(Line::from(Span::styled(
            "REMOTE SESSION",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.url.to_string(),
            Style::default().fg(palette::TEXT_PRIMARY),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[m] minimize  [g] close  [o] open external",
            styles::dim_text(),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_minimized(self, area: Rect, buf: &mut Buffer) {
        let chip = Line::from(vec![
            Span::styled("▞ ", Style::default().fg(palette::ACCENT)),
            Span::styled(
                "GAME TERMINAL :: MINIMIZED",
                Style::default().fg(palette::ACCENT),
            ),
            Span::styled("  [m] restore", styles::dim_text()),
        ]);
        Paragraph::new(chip)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for EmbedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.minimized {
            self.render_minimized(area, buf);
        } else {
            self.render_open(area, buf);
        }
    }
}
