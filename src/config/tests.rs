use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_explicit_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("RETRO_PLAYER_CONFIG_PATH", "/tmp/retro-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/retro-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("retro-player")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("retro-player")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_falls_back_to_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/retro-player/retro-player.log")
    );
}

#[test]
fn defaults_match_reference_player() {
    let s = Settings::default();
    assert!((s.engine.initial_volume - 0.7).abs() < f32::EPSILON);
    assert_eq!(s.engine.tick_interval_ms, 50);
    assert_eq!(s.engine.auto_play_delay_ms, 100);
    assert_eq!(s.engine.visualizer_bars, 16);
    assert_eq!(s.engine.waveform_bars, 50);
    assert_eq!(s.ui.skin, SkinSetting::Winamp);
    assert!(s.tracks.is_empty());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_skin_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[engine]
initial_volume = 0.25
tick_interval_ms = 40
auto_play_delay_ms = 250
visualizer_bars = 8

[ui]
skin = "turntable"
header_text = "hello"

[controls]
volume_step = 0.1

[logging]
file = "/tmp/retro.log"
filter = "debug"

[library]
extensions = ["mp3"]
recursive = false
name_fields = ["filename"]
name_separator = "::"

[[tracks]]
name = "Spektrem - Shine"
source = "music/shine.mp3"

[[tracks]]
name = "Silence"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RETRO_PLAYER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("RETRO_PLAYER__ENGINE__TICK_INTERVAL_MS");

    let s = Settings::load().unwrap();
    assert!((s.engine.initial_volume - 0.25).abs() < f32::EPSILON);
    assert_eq!(s.engine.tick_interval_ms, 40);
    assert_eq!(s.engine.auto_play_delay_ms, 250);
    assert_eq!(s.engine.visualizer_bars, 8);
    assert_eq!(s.engine.waveform_bars, 50);
    assert_eq!(s.ui.skin, SkinSetting::Technics);
    assert_eq!(s.ui.header_text, "hello");
    assert!((s.controls.volume_step - 0.1).abs() < f32::EPSILON);
    assert_eq!(
        s.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/retro.log"))
    );
    assert_eq!(s.logging.filter, "debug");
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(matches!(s.library.name_fields[0], TrackDisplayField::Filename));
    assert_eq!(s.library.name_separator, "::");
    assert_eq!(s.tracks.len(), 2);
    assert_eq!(s.tracks[0].name, "Spektrem - Shine");
    assert_eq!(
        s.tracks[0].source.as_deref(),
        Some(std::path::Path::new("music/shine.mp3"))
    );
    assert!(s.tracks[1].source.is_none());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[engine]
tick_interval_ms = 50
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RETRO_PLAYER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("RETRO_PLAYER__ENGINE__TICK_INTERVAL_MS", "20");

    let s = Settings::load().unwrap();
    assert_eq!(s.engine.tick_interval_ms, 20);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.engine.initial_volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.engine.tick_interval_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.engine.waveform_bars = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.volume_step = 0.0;
    assert!(s.validate().is_err());
}
