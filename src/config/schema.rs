use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tempodeck/config.toml` or `~/.config/tempodeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TEMPODECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Volume at startup, 0..=100.
    pub initial_volume: u8,
    /// Track length used when a duration label cannot be parsed.
    pub fallback_duration_secs: u32,
    /// Interval between simulated clock ticks (milliseconds).
    /// One tick advances playback by one second.
    pub tick_ms: u64,
    /// Number of bars in the player-bar waveform.
    pub waveform_bars: usize,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: 75,
            fallback_duration_secs: 220,
            tick_ms: 1000,
            waveform_bars: 80,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u32,
    /// Volume change per `+` / `-` press.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the queue panel starts open.
    pub open_queue_on_start: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Music without limits ~ ".to_string(),
            open_queue_on_start: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Optional TOML file of `[[tracks]]`; the built-in list is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file. The terminal is owned by the UI, so without a file nothing is logged.
    pub file: Option<PathBuf>,
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}
