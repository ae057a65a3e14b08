//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handling
//!
//! `update()` never performs I/O or spawns tasks; anything with a side
//! effect outside the state container comes back as an [`UpdateAction`]
//! for the event loop to execute.

pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Stop the repeating boot timer (boot sequence completed)
    CancelBootTimer,

    /// Deliver `message` after `delay` via a one-shot timer
    ScheduleOnce { delay: Duration, message: Message },

    /// Ask the host environment to open `url` in an external program.
    /// Fire-and-forget; no outcome is reported back to the state.
    OpenExternal { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
