//! # rpanel-core - Core Domain Types
//!
//! Foundation crate for Retro Panel. Provides domain types, error handling,
//! and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppPhase`] - Top-level lifecycle phase (Loading, Active, ...)
//! - [`ConnectionStatus`] - Simulated game-link status
//! - [`LogEntry`] - A single timestamped system-log line
//! - [`LogTrail`] - Bounded newest-first log of [`LogEntry`]
//! - [`EmbedState`] - Open/minimized state of the embedded game terminal
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use rpanel_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Retro Panel crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{AppPhase, ConnectionStatus, EmbedState, LogEntry, LogTrail, LOG_CAPACITY};
