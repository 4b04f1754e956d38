//! Engine state types shared with skin renderers.

use super::format::progress_percent;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransportState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Direction for relative track changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Purely cosmetic values fed to skins that render motion.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    /// Rotation accumulator in degrees. Grows monotonically while playing.
    pub rotation: f64,
    /// Spectrum-style bars, each within `0..=100`.
    pub visualizer: Vec<f32>,
    /// Waveform bars, each within `20..=80`.
    pub waveform: Vec<f32>,
}

impl Animation {
    /// Rotation folded into `0..360` for drawing.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.rem_euclid(360.0)
    }
}

/// Snapshot of everything a skin may render.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub track_index: usize,
    pub transport: TransportState,
    /// Seconds into the current track.
    pub elapsed: f64,
    /// Track length in seconds; `0` until the backend reports metadata.
    pub duration: f64,
    /// Output level in `0.0..=1.0`.
    pub volume: f32,
    pub animation: Animation,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.transport == TransportState::Playing
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.elapsed, self.duration)
    }

    /// Seconds left in the current track, never negative.
    pub fn remaining(&self) -> f64 {
        (self.duration - self.elapsed).max(0.0)
    }
}
