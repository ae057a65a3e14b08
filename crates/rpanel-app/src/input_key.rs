//! Terminal-agnostic key representation
//!
//! Keeps this crate free of crossterm; the TUI layer converts its key
//! events into this enum before they enter the update loop.

/// Keys the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
}
