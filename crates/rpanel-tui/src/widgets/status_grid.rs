//! Status tile row: POWER / MEMORY / LINK

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rpanel_core::ConnectionStatus;

use crate::theme::styles;

/// Three-tile dashboard row.
pub struct StatusGrid {
    power_active: bool,
    link: ConnectionStatus,
}

impl StatusGrid {
    pub fn new(power_active: bool, link: ConnectionStatus) -> Self {
        Self { power_active, link }
    }

    fn render_tile(area: Rect, buf: &mut Buffer, accented: bool, label: &str, value: Line) {
        let block = styles::retro_block(accented);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(label.to_string(), styles::dim_text())),
            value,
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for StatusGrid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tiles = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        let power_value = Line::from(Span::styled(
            if self.power_active { "ON" } else { "OFF" },
            styles::power_value(self.power_active),
        ));
        Self::render_tile(tiles[0], buf, self.power_active, "POWER", power_value);

        let memory_value = Line::from(Span::styled("64K OK", styles::body_text(false)));
        Self::render_tile(tiles[1], buf, false, "MEMORY", memory_value);

        let (icon, style) = styles::link_indicator(&self.link);
        let link_value = Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(self.link.label(), style),
        ]);
        Self::render_tile(tiles[2], buf, false, "LINK", link_value);
    }
}
