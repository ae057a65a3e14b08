//! System log panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rpanel_core::LogTrail;

use crate::theme::{palette, styles};

/// Bounded newest-first system log, one entry per row.
pub struct LogPanel<'a> {
    trail: &'a LogTrail,
}

impl<'a> LogPanel<'a> {
    pub fn new(trail: &'a LogTrail) -> Self {
        Self { trail }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::retro_block(false)
            .title(Span::styled(" SYSTEM LOG ", styles::section_title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .trail
            .iter()
            .take(inner.height as usize)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!("[{}] ", entry.formatted_time()), styles::dim_text()),
                    Span::styled(
                        entry.message.clone(),
                        ratatui::style::Style::default().fg(palette::LOG_TEXT),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
