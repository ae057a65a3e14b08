//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use rpanel_app::AppState;
use rpanel_core::AppPhase;

use crate::layout as screen_layout;
use crate::theme::{palette, styles};
use crate::widgets::{EmbedPanel, LogPanel, PanelHeader, StatusGrid};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the complete UI (View function in TEA)
///
/// This is a pure projection of the state; it never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the tube with black
    let bg_block = Block::default().style(Style::default().bg(palette::SCREEN_BG));
    frame.render_widget(bg_block, area);

    match state.phase {
        AppPhase::Loading => render_boot_screen(frame, state, area),
        _ => render_console(frame, state, area),
    }

    if state.settings.ui.scanlines && state.phase.is_interactive() {
        apply_scanlines(frame.buffer_mut());
    }
}

/// The active console: header, status tiles, embed/control body, log, footer.
fn render_console(frame: &mut Frame, state: &AppState, area: Rect) {
    let areas = screen_layout::create(area);

    frame.render_widget(PanelHeader::new(VERSION), areas.header);
    frame.render_widget(StatusGrid::new(state.power_active, state.link), areas.status);

    if state.embed.is_open() {
        let viewport = EmbedPanel::viewport(areas.body);
        frame.render_widget(Clear, viewport);
        frame.render_widget(EmbedPanel::new(&state.settings.embed.url), viewport);
    } else if state.embed.active {
        // Minimized: placeholder chip only, no control deck behind it
        frame.render_widget(
            EmbedPanel::new(&state.settings.embed.url).minimized(true),
            areas.body,
        );
    } else {
        render_control_deck(frame, state, areas.body);
    }

    frame.render_widget(LogPanel::new(&state.log), areas.log);

    let footer = Paragraph::new(Line::from(Span::styled(
        "SECURE CONNECTION ESTABLISHED",
        styles::dim_text(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, areas.footer);
}

/// Primary control panel shown while the embedded surface is closed.
fn render_control_deck(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = styles::retro_block(false).title(Span::styled(" CONTROLS ", styles::section_title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            "RETRO CONSOLE ACTIVATED",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "WELCOME, USER. THE INTERFACE IS SECURE.",
            styles::body_text(state.settings.ui.high_contrast),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[g] ", Style::default().fg(palette::ACCENT)),
            Span::styled(
                "LAUNCH GAME TERMINAL",
                styles::body_text(state.settings.ui.high_contrast),
            ),
        ]),
        Line::from(Span::styled(
            "[a] POWER   [p] PING   [s] SYNC LINK",
            styles::dim_text(),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Boot screen: centered box with the app name, the current boot line,
/// and a progress bar.
fn render_boot_screen(frame: &mut Frame, state: &AppState, area: Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(9),
            Constraint::Percentage(35),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    let center = horizontal[1];
    frame.render_widget(Clear, center);

    let progress = state.boot.as_ref().map(|b| b.progress()).unwrap_or(1.0);
    let bar_width = center.width.saturating_sub(6) as usize;
    let filled = (progress * bar_width as f64).round() as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width.saturating_sub(filled));

    let lines = vec![
        Line::from(Span::styled(
            crate::widgets::APP_NAME,
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            state.boot_text.clone(),
            styles::body_text(state.settings.ui.high_contrast),
        )),
        Line::from(""),
        Line::from(Span::styled(bar, Style::default().fg(palette::ACCENT))),
    ];

    let block = styles::retro_block(true);
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        center,
    );
}

/// Dim every other row for the CRT scanline effect.
fn apply_scanlines(buf: &mut Buffer) {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        if y % 2 == 1 {
            for x in area.left()..area.right() {
                buf[(x, y)].modifier.insert(Modifier::DIM);
            }
        }
    }
}
