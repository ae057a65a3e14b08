//! Widgets for the Retro Panel console

mod embed_panel;
mod header;
mod log_panel;
mod status_grid;

pub use embed_panel::{EmbedPanel, EMBED_VIEWPORT_HEIGHT, EMBED_VIEWPORT_WIDTH};
pub use header::{PanelHeader, APP_NAME};
pub use log_panel::LogPanel;
pub use status_grid::StatusGrid;
