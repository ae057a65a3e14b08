//! Settings parser for .rpanel/config.toml

use std::path::Path;

use rpanel_core::prelude::*;

use super::types::{Settings, DEFAULT_EMBED_URL};

const CONFIG_FILENAME: &str = "config.toml";
const RPANEL_DIR: &str = ".rpanel";

/// Load settings from `<panel_dir>/.rpanel/config.toml`.
///
/// Never fails: a missing file yields defaults, and a malformed file or
/// invalid embed URL is logged and replaced with defaults.
pub fn load_settings(panel_dir: &Path) -> Settings {
    let path = panel_dir.join(RPANEL_DIR).join(CONFIG_FILENAME);

    let mut settings = match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Failed to parse {}: {} -- using defaults", path.display(), e);
                Settings::default()
            }
        },
        Err(_) => {
            debug!("No settings file at {} -- using defaults", path.display());
            Settings::default()
        }
    };

    sanitize_embed_url(&mut settings);
    settings
}

/// Replace an unparseable embed URL with the default. The origin is opaque
/// to the rest of the application, so this is the only place it is inspected.
fn sanitize_embed_url(settings: &mut Settings) {
    if url::Url::parse(&settings.embed.url).is_err() {
        warn!(
            "Invalid embed url {:?} -- falling back to {}",
            settings.embed.url, DEFAULT_EMBED_URL
        );
        settings.embed.url = DEFAULT_EMBED_URL.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, contents: &str) {
        let config_dir = dir.join(RPANEL_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILENAME), contents).unwrap();
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings.boot.interval_ms, 600);
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
            [link]
            sync_delay_ms = 50
            ping_delay_ms = 10
            "#,
        );

        let settings = load_settings(dir.path());
        assert_eq!(settings.link.sync_delay_ms, 50);
        assert_eq!(settings.link.ping_delay_ms, 10);
        // Untouched sections keep defaults
        assert_eq!(settings.boot.interval_ms, 600);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "boot = {{ not toml");

        let settings = load_settings(dir.path());
        assert_eq!(settings.boot.interval_ms, 600);
        assert_eq!(settings.embed.url, DEFAULT_EMBED_URL);
    }

    #[test]
    fn test_invalid_embed_url_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
            [embed]
            url = "not a url"
            "#,
        );

        let settings = load_settings(dir.path());
        assert_eq!(settings.embed.url, DEFAULT_EMBED_URL);
    }

    #[test]
    fn test_custom_embed_url_kept() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
            [embed]
            url = "https://example.com/arcade"
            "#,
        );

        let settings = load_settings(dir.path());
        assert_eq!(settings.embed.url, "https://example.com/arcade");
    }
}
