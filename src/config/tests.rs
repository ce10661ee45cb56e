use super::load::{MAX_WAVEFORM_BARS, default_config_path, resolve_config_path};
use super::schema::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Holds the process-wide env lock and restores every variable it touched,
/// in reverse order, when dropped.
struct ScopedEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    fn new() -> Self {
        static LOCK: Mutex<()> = Mutex::new(());
        Self {
            saved: Vec::new(),
            _lock: LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    fn set(mut self, key: &'static str, val: impl AsRef<std::ffi::OsStr>) -> Self {
        self.saved.push((key, std::env::var_os(key)));
        unsafe { std::env::set_var(key, val) };
        self
    }

    fn unset(mut self, key: &'static str) -> Self {
        self.saved.push((key, std::env::var_os(key)));
        unsafe { std::env::remove_var(key) };
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        while let Some((key, old)) = self.saved.pop() {
            match old {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

/// Point the loader at `path` with no env overrides in play.
fn env_with_config(path: &Path) -> ScopedEnv {
    ScopedEnv::new()
        .set("TEMPODECK_CONFIG_PATH", path)
        .unset("TEMPODECK__PLAYER__TICK_MS")
        .unset("TEMPODECK__PLAYER__WAVEFORM_BARS")
}

#[test]
fn resolve_config_path_prefers_tempodeck_config_path() {
    let _env = ScopedEnv::new().set("TEMPODECK_CONFIG_PATH", "/tmp/tempodeck-test-config.toml");
    assert_eq!(
        resolve_config_path(),
        Some(PathBuf::from("/tmp/tempodeck-test-config.toml"))
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _env = ScopedEnv::new()
        .set("XDG_CONFIG_HOME", "/tmp/xdg-config-home")
        .set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path(),
        Some(PathBuf::from("/tmp/xdg-config-home/tempodeck/config.toml"))
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _env = ScopedEnv::new()
        .unset("XDG_CONFIG_HOME")
        .set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path(),
        Some(PathBuf::from("/tmp/home-dir/.config/tempodeck/config.toml"))
    );
}

#[test]
fn defaults_match_demo_page() {
    let s = Settings::default();
    assert_eq!(s.player.initial_volume, 75);
    assert_eq!(s.player.fallback_duration_secs, 220);
    assert_eq!(s.player.tick_ms, 1000);
    assert_eq!(s.player.waveform_bars, 80);
    assert_eq!(s.controls.scrub_seconds, 5);
    assert!(s.catalog.path.is_none());
    assert!(s.logging.file.is_none());
    assert_eq!(s.logging.level, "info");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
initial_volume = 40
fallback_duration_secs = 180
tick_ms = 250
waveform_bars = 32

[controls]
scrub_seconds = 9
volume_step = 10

[ui]
header_text = "hello"
open_queue_on_start = true

[catalog]
path = "/tmp/catalog.toml"

[logging]
file = "/tmp/tempodeck.log"
level = "debug"
"#,
    )
    .unwrap();

    let _env = env_with_config(&cfg_path);

    let s = Settings::load().unwrap();
    assert_eq!(s.player.initial_volume, 40);
    assert_eq!(s.player.fallback_duration_secs, 180);
    assert_eq!(s.player.tick_ms, 250);
    assert_eq!(s.player.waveform_bars, 32);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.controls.volume_step, 10);
    assert_eq!(s.ui.header_text, "hello");
    assert!(s.ui.open_queue_on_start);
    assert_eq!(
        s.catalog.path.as_deref(),
        Some(Path::new("/tmp/catalog.toml"))
    );
    assert_eq!(
        s.logging.file.as_deref(),
        Some(Path::new("/tmp/tempodeck.log"))
    );
    assert_eq!(s.logging.level, "debug");
}

#[test]
fn settings_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let _env = env_with_config(&dir.path().join("absent.toml"));

    let s = Settings::load().unwrap();
    assert_eq!(s.player.tick_ms, 1000);
    assert_eq!(s.ui.header_text, UiSettings::default().header_text);
}

#[test]
fn settings_env_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
tick_ms = 250
"#,
    )
    .unwrap();

    let _env = env_with_config(&cfg_path).set("TEMPODECK__PLAYER__TICK_MS", "10");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.tick_ms, 10);
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut s = Settings::default();
    s.player.tick_ms = 0;
    assert!(s.validate().unwrap_err().contains("tick_ms"));

    for bars in [0, MAX_WAVEFORM_BARS + 1, usize::MAX] {
        let mut s = Settings::default();
        s.player.waveform_bars = bars;
        assert!(s.validate().unwrap_err().contains("waveform_bars"));
    }

    let mut s = Settings::default();
    s.player.waveform_bars = MAX_WAVEFORM_BARS;
    assert!(s.validate().is_ok());

    let mut s = Settings::default();
    s.player.initial_volume = 101;
    assert!(s.validate().unwrap_err().contains("initial_volume"));

    let mut s = Settings::default();
    s.controls.volume_step = 0;
    assert!(s.validate().unwrap_err().contains("volume_step"));
}

#[test]
fn oversized_waveform_from_env_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let _env = env_with_config(&dir.path().join("absent.toml"))
        .set("TEMPODECK__PLAYER__WAVEFORM_BARS", "18446744073709551615");

    let s = Settings::load_or_default();
    assert_eq!(s.player.waveform_bars, 80);
}

#[test]
fn load_or_default_replaces_invalid_or_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    let _env = env_with_config(&cfg_path);

    std::fs::write(&cfg_path, "[player]\ntick_ms = 0\ninitial_volume = 10\n").unwrap();
    let s = Settings::load_or_default();
    assert_eq!(s.player.tick_ms, 1000);
    assert_eq!(s.player.initial_volume, 75);

    std::fs::write(&cfg_path, "[player\ntick_ms = ").unwrap();
    assert_eq!(Settings::load_or_default().player.tick_ms, 1000);

    std::fs::write(&cfg_path, "[player]\ntick_ms = 250\n").unwrap();
    assert_eq!(Settings::load_or_default().player.tick_ms, 250);
}
