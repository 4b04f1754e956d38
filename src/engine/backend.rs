use std::path::{Path, PathBuf};

use thiserror::Error;

/// Notifications the backend raises between engine commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendEvent {
    /// Playback position, in seconds.
    TimeProgressed(f64),
    /// Length of the loaded source, in seconds.
    MetadataReady(f64),
    /// The loaded source played to its end.
    Ended,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no source loaded")]
    NoSource,

    #[error("no audio output device available")]
    NoOutputDevice,

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

/// The audio output capability the engine drives.
///
/// Start/stop requests are fire-and-forget; outcomes arrive later through
/// [`AudioBackend::poll_events`], except for `play()` which may fail up front.
pub trait AudioBackend {
    /// Bind a new source. `None` unloads whatever was bound.
    fn load(&mut self, source: Option<&Path>);
    fn play(&mut self) -> Result<(), BackendError>;
    fn pause(&mut self);
    fn reset_to_start(&mut self);
    /// Apply an output level in `0.0..=1.0`.
    fn set_output_level(&mut self, level: f32);
    /// Drain notifications raised since the last call.
    fn poll_events(&mut self) -> Vec<BackendEvent>;
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn load(&mut self, source: Option<&Path>) {
        (**self).load(source)
    }

    fn play(&mut self) -> Result<(), BackendError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn reset_to_start(&mut self) {
        (**self).reset_to_start()
    }

    fn set_output_level(&mut self, level: f32) {
        (**self).set_output_level(level)
    }

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        (**self).poll_events()
    }
}

/// Backend used when no output device could be opened.
///
/// Every `play()` fails, so the engine runs purely visually.
#[derive(Debug, Default)]
pub struct SilentBackend {
    loaded: bool,
}

impl AudioBackend for SilentBackend {
    fn load(&mut self, source: Option<&Path>) {
        self.loaded = source.is_some();
    }

    fn play(&mut self) -> Result<(), BackendError> {
        if self.loaded {
            Err(BackendError::NoOutputDevice)
        } else {
            Err(BackendError::NoSource)
        }
    }

    fn pause(&mut self) {}

    fn reset_to_start(&mut self) {}

    fn set_output_level(&mut self, _level: f32) {}

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        Vec::new()
    }
}
