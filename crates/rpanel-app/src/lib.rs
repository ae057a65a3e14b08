//! rpanel-app - Application state and orchestration for Retro Panel
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update`] the transition function. Timers are explicit tasks
//! owned by a [`Scheduler`] whose cancellation handles are invoked on
//! teardown.

pub mod actions;
pub mod boot;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod scheduler;
pub mod signals;
pub mod state;

// Re-export primary types
pub use boot::{BootState, BootStep};
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use scheduler::Scheduler;
pub use state::AppState;
