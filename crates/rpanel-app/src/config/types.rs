//! Configuration types for Retro Panel

use serde::{Deserialize, Serialize};

/// Default origin of the embedded game terminal. Treated as an opaque
/// string everywhere except config validation.
pub const DEFAULT_EMBED_URL: &str = "https://play.retrovault.net/terminal";

/// Application settings (.rpanel/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub boot: BootSettings,

    #[serde(default)]
    pub link: LinkSettings,

    #[serde(default)]
    pub embed: EmbedSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Boot sequence settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootSettings {
    /// Delay between boot steps in milliseconds
    #[serde(default = "default_boot_interval_ms")]
    pub interval_ms: u64,

    /// Override the built-in boot message sequence
    #[serde(default)]
    pub messages: Option<Vec<String>>,
}

impl Default for BootSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_boot_interval_ms(),
            messages: None,
        }
    }
}

fn default_boot_interval_ms() -> u64 {
    600
}

/// Simulated game-link settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkSettings {
    /// Delay before a manual sync reports completion, in milliseconds
    #[serde(default = "default_sync_delay_ms")]
    pub sync_delay_ms: u64,

    /// Delay before a ping reports its response, in milliseconds
    #[serde(default = "default_ping_delay_ms")]
    pub ping_delay_ms: u64,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            sync_delay_ms: default_sync_delay_ms(),
            ping_delay_ms: default_ping_delay_ms(),
        }
    }
}

fn default_sync_delay_ms() -> u64 {
    1000
}

fn default_ping_delay_ms() -> u64 {
    400
}

/// Embedded surface settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedSettings {
    /// Origin of the embedded game terminal
    #[serde(default = "default_embed_url")]
    pub url: String,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            url: default_embed_url(),
        }
    }
}

fn default_embed_url() -> String {
    DEFAULT_EMBED_URL.to_string()
}

/// Display settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Dim alternating rows on the active screen for a CRT look
    #[serde(default = "default_scanlines")]
    pub scanlines: bool,

    /// Use the brighter text palette
    #[serde(default)]
    pub high_contrast: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            scanlines: default_scanlines(),
            high_contrast: false,
        }
    }
}

fn default_scanlines() -> bool {
    true
}
