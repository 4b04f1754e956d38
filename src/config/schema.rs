use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/retro-player/config.toml` or
/// `~/.config/retro-player/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RETRO_PLAYER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
    /// Explicit playlist. When empty, the library directory is scanned instead.
    pub tracks: Vec<TrackEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Output level applied when the engine starts (0.0 - 1.0).
    pub initial_volume: f32,
    /// Animation tick cadence while playing (milliseconds).
    pub tick_interval_ms: u64,
    /// Grace period between an auto-advance and the implicit play (milliseconds).
    pub auto_play_delay_ms: u64,
    /// Degrees added to the rotation accumulator on every tick.
    pub rotation_step: f64,
    /// Number of visualizer samples (values in 0..=100).
    pub visualizer_bars: usize,
    /// Number of waveform samples (values in 20..=80).
    pub waveform_bars: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            initial_volume: 0.7,
            tick_interval_ms: 50,
            auto_play_delay_ms: 100,
            rotation_step: 3.0,
            visualizer_bars: 16,
            waveform_bars: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Skin shown at startup.
    pub skin: SkinSetting,
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            skin: SkinSetting::Winamp,
            header_text: " ~ RETRO PLAYER ~ ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinSetting {
    Winamp,
    #[serde(alias = "bmw-e38", alias = "car")]
    Bmw,
    #[serde(alias = "cdj-2000", alias = "deck")]
    Cdj,
    Walkman,
    Boombox,
    #[serde(alias = "sl-1200", alias = "turntable")]
    Technics,
    #[serde(alias = "atari-2600", alias = "console")]
    Atari,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Volume change applied by `+` / `-`.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { volume_step: 0.05 }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    Filename,
    Path,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,

    /// Which fields to use to build a scanned track's name, and their order.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub name_fields: Vec<TrackDisplayField>,
    /// Separator used to join `name_fields`.
    pub name_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
            name_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            name_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file. Defaults to the XDG state directory.
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

/// One `[[tracks]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackEntry {
    pub name: String,
    #[serde(default)]
    pub source: Option<PathBuf>,
}
