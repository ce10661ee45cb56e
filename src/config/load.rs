use std::{env, path::PathBuf};

use super::schema::Settings;

/// Upper bound for `player.waveform_bars`; wider than any terminal row.
pub const MAX_WAVEFORM_BARS: usize = 1024;

/// Configuration loading helpers.
///
/// `Settings::load` layers an optional config file under environment
/// variables (prefix `TEMPODECK__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TEMPODECK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Load and validate, reporting any problem on stderr and falling back
    /// to defaults. Runs before the terminal is handed to the UI.
    pub fn load_or_default() -> Self {
        let settings = Self::load()
            .map_err(|e| format!("failed to load config: {e}"))
            .and_then(|s| {
                s.validate()
                    .map(|()| s)
                    .map_err(|msg| format!("invalid config: {msg}"))
            });
        settings.unwrap_or_else(|msg| {
            eprintln!("tempodeck: {msg}, using defaults");
            Self::default()
        })
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.player.tick_ms == 0 {
            return Err("player.tick_ms must be >= 1".to_string());
        }
        if !(1..=MAX_WAVEFORM_BARS).contains(&self.player.waveform_bars) {
            return Err(format!(
                "player.waveform_bars must be within 1..={MAX_WAVEFORM_BARS}"
            ));
        }
        if self.player.initial_volume > 100 {
            return Err("player.initial_volume must be <= 100".to_string());
        }
        if self.controls.volume_step == 0 {
            return Err("controls.volume_step must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `TEMPODECK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TEMPODECK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tempodeck/config.toml`
/// or `~/.config/tempodeck/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tempodeck").join("config.toml"))
}
