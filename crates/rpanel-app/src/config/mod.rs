//! Configuration loading for Retro Panel
//!
//! Settings live in `.rpanel/config.toml` under the panel directory.
//! Loading is lenient: a missing file yields defaults, a malformed file
//! is logged and yields defaults.

mod settings;
mod types;

pub use settings::load_settings;
pub use types::{
    BootSettings, EmbedSettings, LinkSettings, Settings, UiSettings, DEFAULT_EMBED_URL,
};
