use thiserror::Error;

use super::backend::BackendError;

/// Errors surfaced by engine commands.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The backend could not start the current source. Never propagated out
    /// of `play()`; the engine records it and keeps animating.
    #[error("playback unavailable for {track:?}: {source}")]
    PlaybackUnavailable {
        track: String,
        #[source]
        source: BackendError,
    },

    /// A selection pointed outside the track list (or the list is empty).
    #[error("track index {index} out of range for {len} track(s)")]
    InvalidTrackIndex { index: usize, len: usize },

    /// The engine was disposed and no longer accepts track changes.
    #[error("engine disposed")]
    Disposed,
}
