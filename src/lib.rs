//! Retro Panel - a CRT-styled status console for the terminal
//!
//! Thin facade over the workspace crates; the binary and the integration
//! tests use these re-exports.

pub use rpanel_app as app;
pub use rpanel_core as core;
pub use rpanel_tui as tui;
